//! Scroll-linked styling, computed purely from the current scroll offset.

use crate::constants::{HERO_FADE_VIEWPORT_FRACTION, HERO_GLOW_MAX_OPACITY, SCROLL_PROMPT_FADE_RATE};

/// Scroll progress in percent of the scrollable height.
///
/// NaN when the document does not scroll (`scroll_height <=
/// viewport_height`); callers leave the bar untouched in that case.
#[inline]
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable > 0.0 {
        scroll_top / scrollable * 100.0
    } else {
        f64::NAN
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFade {
    pub logo: f64,
    pub glow: f64,
    pub prompt: f64,
}

/// Hero fades out over the first half viewport; the scroll prompt twice as fast.
pub fn hero_fade(scroll_y: f64, viewport_height: f64) -> HeroFade {
    let span = viewport_height * HERO_FADE_VIEWPORT_FRACTION;
    let p = if span > 0.0 {
        (scroll_y / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    HeroFade {
        logo: 1.0 - p,
        glow: (1.0 - p) * HERO_GLOW_MAX_OPACITY,
        prompt: (1.0 - p * SCROLL_PROMPT_FADE_RATE).clamp(0.0, 1.0),
    }
}
