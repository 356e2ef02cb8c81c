use crate::constants::{TOGGLE_BUTTON_ID, UPSIDE_DOWN_CLASS};
use crate::dom;
use crate::PageSession;
use std::rc::Rc;
use web_sys as web;

pub fn wire_toggle(document: &web::Document, session: Rc<PageSession>) {
    let Some(button) = dom::html_element(document, TOGGLE_BUTTON_ID) else {
        return;
    };
    let body = document.body();
    dom::add_click_listener(&button, move || {
        let on = session.toggle_upside_down();
        if let Some(body) = &body {
            dom::set_class(body, UPSIDE_DOWN_CLASS, on);
        }
        log::info!("[toggle] {}", if on { "upside down" } else { "normal" });
    });
    super::keyboard::wire_toggle_key(document, button);
}
