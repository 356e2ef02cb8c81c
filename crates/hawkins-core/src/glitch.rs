//! Horizontal glitch slices over the hero.

use crate::constants::*;
use crate::timer::Timer;
use crate::SharedRng;
use rand::Rng;
use std::rc::Rc;

/// Static placement of slice `index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceLayout {
    pub top_pct: f64,
    pub animation_delay_s: f64,
}

impl SliceLayout {
    pub fn for_index(index: usize) -> Self {
        Self {
            top_pct: GLITCH_TOP_BASE_PCT + index as f64 * GLITCH_TOP_STEP_PCT,
            animation_delay_s: index as f64 * GLITCH_DELAY_STEP_SEC,
        }
    }
}

/// One brief appearance of a slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchFlash {
    pub opacity: f64,
    pub height_px: f64,
    pub offset_px: f64,
    pub hide_after_ms: u32,
}

impl GlitchFlash {
    /// Coin flip per slice; heads gives a randomized flash.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        if !rng.gen_bool(GLITCH_SHOW_CHANCE) {
            return None;
        }
        Some(Self {
            opacity: GLITCH_OPACITY,
            height_px: rng.gen_range(GLITCH_MIN_HEIGHT_PX..GLITCH_MAX_HEIGHT_PX),
            offset_px: rng.gen_range(-GLITCH_MAX_OFFSET_PX..GLITCH_MAX_OFFSET_PX),
            hide_after_ms: rng.gen_range(GLITCH_MIN_HIDE_MS..GLITCH_MAX_HIDE_MS),
        })
    }
}

pub trait GlitchBands {
    fn len(&self) -> usize;
    fn show(&self, index: usize, flash: &GlitchFlash);
    fn hide(&self, index: usize);
}

/// Roll every band once.
pub fn trigger<B: GlitchBands + 'static>(bands: &Rc<B>, timer: &dyn Timer, rng: &SharedRng) {
    for index in 0..bands.len() {
        let Some(flash) = GlitchFlash::roll(&mut *rng.borrow_mut()) else {
            continue;
        };
        bands.show(index, &flash);
        let bands = Rc::clone(bands);
        timer.defer(flash.hide_after_ms, Box::new(move || bands.hide(index)));
    }
}

/// Roll the bands every [`GLITCH_INTERVAL_MS`] for the page's lifetime.
pub fn start<B: GlitchBands + 'static>(bands: Rc<B>, timer: Rc<dyn Timer>, rng: SharedRng) {
    let ticker = Rc::clone(&timer);
    timer.every(
        GLITCH_INTERVAL_MS,
        Box::new(move || trigger(&bands, &*ticker, &rng)),
    );
}
