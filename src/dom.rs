use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element the page is expected to provide; warns when absent.
pub fn element(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[dom] missing #{}", id);
    }
    el
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    element(document, id).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Passive window scroll listener; the handler also runs once immediately.
pub fn add_scroll_listener(mut handler: impl FnMut(&web::Window) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    handler(&window);
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || handler(&win)) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// `window.scrollY` and `window.innerHeight`, zero when unavailable.
pub fn scroll_metrics(window: &web::Window) -> (f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_y, viewport)
}
