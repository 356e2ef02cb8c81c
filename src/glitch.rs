use crate::constants::{GLITCH_SLICES_ID, GLITCH_SLICE_CLASS};
use crate::dom;
use hawkins_core::constants::GLITCH_SLICE_COUNT;
use hawkins_core::glitch::{GlitchBands, GlitchFlash, SliceLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The horizontal slices inside `#glitchSlices`.
pub struct DomGlitchBands {
    slices: Vec<web::HtmlElement>,
}

impl DomGlitchBands {
    pub fn build(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(container) = dom::element(document, GLITCH_SLICES_ID) else {
            return Ok(None);
        };
        let mut slices = Vec::with_capacity(GLITCH_SLICE_COUNT);
        for i in 0..GLITCH_SLICE_COUNT {
            let slice = dom::create(document, "div", GLITCH_SLICE_CLASS)?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            let layout = SliceLayout::for_index(i);
            dom::set_style(&slice, "top", &format!("{}%", layout.top_pct));
            dom::set_style(
                &slice,
                "animation-delay",
                &format!("{:.1}s", layout.animation_delay_s),
            );
            dom::append(&container, &slice)?;
            slices.push(slice);
        }
        Ok(Some(Self { slices }))
    }
}

impl GlitchBands for DomGlitchBands {
    fn len(&self) -> usize {
        self.slices.len()
    }

    fn show(&self, index: usize, flash: &GlitchFlash) {
        if let Some(slice) = self.slices.get(index) {
            dom::set_style(slice, "opacity", &flash.opacity.to_string());
            dom::set_style(slice, "height", &format!("{:.2}px", flash.height_px));
            dom::set_style(
                slice,
                "transform",
                &format!("translateX({:.2}px)", flash.offset_px),
            );
        }
    }

    fn hide(&self, index: usize) {
        if let Some(slice) = self.slices.get(index) {
            dom::set_style(slice, "opacity", "0");
            dom::set_style(slice, "transform", "translateX(0)");
        }
    }
}
