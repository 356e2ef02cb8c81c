use crate::constants::*;
use crate::dom;
use hawkins_core::scroll::{hero_fade, progress_percent};
use web_sys as web;

pub fn wire_scroll_progress(document: &web::Document) {
    let Some(bar) = dom::html_element(document, SCROLL_PROGRESS_ID) else {
        return;
    };
    let document = document.clone();
    dom::add_scroll_listener(move |window| {
        let (scroll_y, viewport) = dom::scroll_metrics(window);
        let Some(root) = document.document_element() else {
            return;
        };
        let percent = progress_percent(scroll_y, root.scroll_height() as f64, viewport);
        if percent.is_finite() {
            dom::set_style(&bar, "width", &format!("{percent}%"));
        }
    });
}

pub fn wire_hero_fade(document: &web::Document) {
    let logo = dom::html_element(document, LOGO_WRAPPER_ID);
    let glow = dom::html_element(document, LOGO_GLOW_ID);
    let prompt = dom::html_element(document, SCROLL_PROMPT_ID);
    if logo.is_none() && glow.is_none() && prompt.is_none() {
        return;
    }
    dom::add_scroll_listener(move |window| {
        let (scroll_y, viewport) = dom::scroll_metrics(window);
        let fade = hero_fade(scroll_y, viewport);
        for (el, opacity) in [(&logo, fade.logo), (&glow, fade.glow), (&prompt, fade.prompt)] {
            if let Some(el) = el {
                dom::set_style(el, "opacity", &opacity.to_string());
            }
        }
    });
}
