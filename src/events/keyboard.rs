use hawkins_core::input::is_upside_down_key;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// `u` anywhere on the page acts like clicking the toggle button.
pub fn wire_toggle_key(document: &web::Document, button: web::HtmlElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if is_upside_down_key(&ev.key()) {
            button.click();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
