//! `window.strangerThings`: diagnostics only, not a stable API.

use crate::constants::DEBUG_GLOBAL;
use crate::PageSession;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

fn to_js<T: serde::Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> anyhow::Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn set_fn<F: ?Sized + wasm_bindgen::closure::WasmClosure>(
    target: &JsValue,
    key: &str,
    closure: Closure<F>,
) -> anyhow::Result<()> {
    set(target, key, closure.as_ref())?;
    closure.forget();
    Ok(())
}

pub fn expose(session: &Rc<PageSession>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let handle: JsValue = js_sys::Object::new().into();

    set(&handle, "config", &to_js(session.config())?)?;

    let s = Rc::clone(session);
    set_fn(
        &handle,
        "state",
        Closure::wrap(Box::new(move || to_js(&s.snapshot()).unwrap_or(JsValue::NULL))
            as Box<dyn FnMut() -> JsValue>),
    )?;

    let sequencer = Rc::clone(session.sequencer());
    set_fn(
        &handle,
        "spellMessage",
        Closure::wrap(Box::new(move |text: String| {
            let sequencer = Rc::clone(&sequencer);
            future_to_promise(async move {
                Ok(JsValue::from_bool(sequencer.spell_message(&text).await))
            })
        }) as Box<dyn FnMut(String) -> js_sys::Promise>),
    )?;

    let registry = Rc::clone(session.sequencer().registry());
    set_fn(
        &handle,
        "lightUp",
        Closure::wrap(Box::new(move |letter: String| {
            if let Some(ch) = letter.chars().next() {
                registry.borrow_mut().light_up(ch);
            }
        }) as Box<dyn FnMut(String)>),
    )?;

    let registry = Rc::clone(session.sequencer().registry());
    set_fn(
        &handle,
        "turnOff",
        Closure::wrap(Box::new(move |letter: String| {
            if let Some(ch) = letter.chars().next() {
                registry.borrow_mut().turn_off(ch);
            }
        }) as Box<dyn FnMut(String)>),
    )?;

    set(&window, DEBUG_GLOBAL, &handle)?;
    log::info!("[debug] window.{} installed", DEBUG_GLOBAL);
    Ok(())
}
