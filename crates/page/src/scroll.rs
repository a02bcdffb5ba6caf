use runtime::clamp_progress;
use serde::{Deserialize, Serialize};

/// Document scroll state in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl PageMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

/// Element bounding box relative to the viewport top.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

/// Fraction of the document scrolled, in `[0, 1]`.
///
/// A page that cannot scroll reports 0.
pub fn page_progress(metrics: &PageMetrics) -> f64 {
    let max = metrics.max_scroll();
    if max <= 0.0 {
        return 0.0;
    }
    clamp_progress(metrics.scroll_y / max)
}

/// How far an element has travelled through the viewport, in `[0, 1]`.
///
/// 0 while the element's top is still at or below the viewport bottom, 1
/// once its bottom has passed above the viewport top, linear in between
/// over a distance of `element height + viewport height`.
pub fn element_progress(rect: &ElementRect, viewport_height: f64) -> f64 {
    let span = rect.height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    clamp_progress((viewport_height - rect.top) / span)
}
