use runtime::{ProgressReader, ProgressWriter, scroll_progress};
use serde::{Deserialize, Serialize};

use crate::scroll::{ElementRect, PageMetrics, element_progress, page_progress};

/// Where scroll progress comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "element_id", rename_all = "snake_case")]
pub enum ProgressSource {
    /// Whole-document scroll.
    #[default]
    Page,
    /// Travel of one element through the viewport.
    Element(String),
}

/// One layout sample taken on scroll or resize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutSample {
    pub page: PageMetrics,
    /// Bounding box of the tracked element, if it is mounted.
    pub element: Option<ElementRect>,
}

/// Sole writer of the shared scroll progress.
#[derive(Debug)]
pub struct ScrollTracker {
    source: ProgressSource,
    writer: ProgressWriter,
}

impl ScrollTracker {
    pub fn new(source: ProgressSource) -> (Self, ProgressReader) {
        let (writer, reader) = scroll_progress();
        (Self { source, writer }, reader)
    }

    pub fn source(&self) -> &ProgressSource {
        &self.source
    }

    pub fn set_source(&mut self, source: ProgressSource) {
        if self.source != source {
            tracing::debug!(?source, "scroll progress source changed");
            self.source = source;
        }
    }

    pub fn reader(&self) -> ProgressReader {
        self.writer.reader()
    }

    /// Recompute progress from a layout sample.
    ///
    /// With an element source and no element mounted this is a no-op and
    /// returns `None`; readers keep the previous value.
    pub fn sample(&mut self, layout: &LayoutSample) -> Option<f64> {
        let raw = match &self.source {
            ProgressSource::Page => page_progress(&layout.page),
            ProgressSource::Element(_) => {
                let rect = layout.element?;
                element_progress(&rect, layout.page.viewport_height)
            }
        };
        Some(self.writer.commit(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutSample, ProgressSource, ScrollTracker};
    use crate::scroll::{ElementRect, PageMetrics};

    fn layout(scroll_y: f64, element: Option<ElementRect>) -> LayoutSample {
        LayoutSample {
            page: PageMetrics {
                scroll_y,
                scroll_height: 3000.0,
                viewport_height: 1000.0,
            },
            element,
        }
    }

    #[test]
    fn page_source_publishes_to_readers() {
        let (mut tracker, reader) = ScrollTracker::new(ProgressSource::Page);
        assert_eq!(tracker.sample(&layout(500.0, None)), Some(0.25));
        assert_eq!(reader.get(), 0.25);
        tracker.sample(&layout(2500.0, None));
        assert_eq!(reader.get(), 1.0);
    }

    #[test]
    fn element_source_without_element_is_a_noop() {
        let (mut tracker, reader) = ScrollTracker::new(ProgressSource::Page);
        tracker.sample(&layout(1000.0, None));
        tracker.set_source(ProgressSource::Element("stats".to_string()));
        assert_eq!(tracker.sample(&layout(1500.0, None)), None);
        assert_eq!(reader.get(), 0.5);
    }

    #[test]
    fn element_source_uses_element_travel() {
        let (mut tracker, reader) =
            ScrollTracker::new(ProgressSource::Element("globe".to_string()));
        let rect = ElementRect {
            top: 300.0,
            height: 400.0,
        };
        tracker.sample(&layout(0.0, Some(rect)));
        assert_eq!(reader.get(), 0.5);
    }

    #[test]
    fn source_round_trips_through_json() {
        let src: ProgressSource =
            serde_json::from_str(r#"{ "kind": "element", "element_id": "stats" }"#)
                .expect("element source");
        assert_eq!(src, ProgressSource::Element("stats".to_string()));
        let page: ProgressSource = serde_json::from_str(r#"{ "kind": "page" }"#).expect("page");
        assert_eq!(page, ProgressSource::Page);
    }
}
