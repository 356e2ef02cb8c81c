use hawkins_core::{LocalBoxFuture, Timer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// [`Timer`] backed by the window's `setTimeout`/`setInterval`.
pub struct WebTimer;

impl Timer for WebTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web::window() {
                _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
            }
        });
        Box::pin(async move {
            _ = JsFuture::from(promise).await;
        })
    }

    fn defer(&self, ms: u32, task: Box<dyn FnOnce()>) {
        let Some(window) = web::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || task());
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            ms as i32,
        );
    }

    fn every(&self, ms: u32, task: Box<dyn FnMut()>) {
        let Some(window) = web::window() else {
            return;
        };
        let closure = Closure::wrap(task);
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms as i32,
        );
        closure.forget();
    }
}
