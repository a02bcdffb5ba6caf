use std::cell::Cell;
use std::rc::Rc;

/// Clamp a raw progress sample into `[0, 1]`. NaN maps to 0.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Create the shared scroll-progress cell.
///
/// There is exactly one writer. Readers are cheap to clone and always see
/// the last committed sample. Everything runs on the host's event loop, so
/// a reader can never observe a half-written value.
pub fn scroll_progress() -> (ProgressWriter, ProgressReader) {
    let cell = Rc::new(Cell::new(0.0));
    (
        ProgressWriter { cell: cell.clone() },
        ProgressReader { cell },
    )
}

#[derive(Debug)]
pub struct ProgressWriter {
    cell: Rc<Cell<f64>>,
}

impl ProgressWriter {
    /// Store a new sample, clamped to `[0, 1]`. Returns the committed value.
    pub fn commit(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            tracing::warn!("discarding NaN scroll progress sample");
        }
        let value = clamp_progress(raw);
        self.cell.set(value);
        tracing::trace!(progress = value, "scroll progress committed");
        value
    }

    pub fn reader(&self) -> ProgressReader {
        ProgressReader {
            cell: self.cell.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressReader {
    cell: Rc<Cell<f64>>,
}

impl ProgressReader {
    pub fn get(&self) -> f64 {
        self.cell.get()
    }
}
