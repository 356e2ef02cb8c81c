use crate::constants::*;
use crate::dom;
use hawkins_core::constants::{CREDITS_DELAY_MS, PORTAL_CRACK_DELAY_MS};
use hawkins_core::{Section, Timer};
use std::rc::Rc;
use web_sys as web;

/// Portal, static-noise and credits overlays driven by section effects.
pub struct Stage {
    portal_glow: Option<web::Element>,
    portal_crack: Option<web::Element>,
    static_noise: Option<web::Element>,
    credits: Option<web::Element>,
    glitch_text: Option<web::Element>,
    timer: Rc<dyn Timer>,
}

impl Stage {
    pub fn from_document(document: &web::Document, timer: Rc<dyn Timer>) -> Self {
        let glitch_text = document
            .query_selector(&format!(
                "#{} {}",
                Section::UpsideDown.element_id(),
                GLITCH_TEXT_SELECTOR
            ))
            .ok()
            .flatten();
        Self {
            portal_glow: dom::element(document, PORTAL_GLOW_ID),
            portal_crack: dom::element(document, PORTAL_CRACK_ID),
            static_noise: dom::element(document, STATIC_NOISE_ID),
            credits: dom::element(document, CREDITS_ID),
            glitch_text,
            timer,
        }
    }

    /// Add `class` to `el` after `delay_ms`.
    fn add_class_later(&self, el: &Option<web::Element>, class: &'static str, delay_ms: u32) {
        if let Some(el) = el.clone() {
            self.timer
                .defer(delay_ms, Box::new(move || dom::set_class(&el, class, true)));
        }
    }

    pub fn open_portal(&self) {
        log::info!("[stage] portal opening");
        if let Some(glow) = &self.portal_glow {
            dom::set_class(glow, ACTIVE_CLASS, true);
        }
        self.add_class_later(&self.portal_crack, OPENING_CLASS, PORTAL_CRACK_DELAY_MS);
    }

    pub fn show_credits(&self) {
        log::info!("[stage] showing credits");
        if let Some(noise) = &self.static_noise {
            dom::set_class(noise, ACTIVE_CLASS, true);
        }
        self.add_class_later(&self.credits, VISIBLE_CLASS, CREDITS_DELAY_MS);
    }

    pub fn set_glitch_text(&self, on: bool) {
        if let Some(el) = &self.glitch_text {
            dom::set_class(el, ACTIVE_CLASS, on);
        }
    }
}
