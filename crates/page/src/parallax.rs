use serde::Serialize;

/// Scroll distance before the hero starts to move.
pub const PARALLAX_DEAD_ZONE_PX: f64 = 100.0;
const CONTENT_FADE_PX: f64 = 800.0;
const CARD_FADE_PX: f64 = 1200.0;
const TRANSLATE_FACTOR: f64 = 0.3;

/// Hero section styling for one scroll position.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HeroParallax {
    pub offset_px: f64,
    pub translate_y_px: f64,
    pub content_opacity: f64,
    pub card_opacity: f64,
}

impl HeroParallax {
    pub fn at(scroll_y: f64) -> Self {
        let offset_px = (scroll_y - PARALLAX_DEAD_ZONE_PX).max(0.0);
        Self {
            offset_px,
            translate_y_px: offset_px * TRANSLATE_FACTOR,
            content_opacity: (1.0 - offset_px / CONTENT_FADE_PX).max(0.0),
            card_opacity: (1.0 - offset_px / CARD_FADE_PX).max(0.0),
        }
    }
}
