use foundation::time::Time;

/// Frame metadata handed to per-frame consumers.
///
/// `Frame::new` builds fixed-step frames for replay and tests; `FrameClock`
/// builds them from host animation-frame timestamps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Delta since the previous frame (seconds).
    pub dt_s: f64,
    /// Elapsed time since the first frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}

/// Converts monotonically increasing host timestamps (milliseconds) into
/// frames. The first timestamp becomes elapsed time zero.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    last_ms: f64,
    next_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, timestamp_ms: f64) -> Frame {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        // Hosts occasionally deliver a timestamp slightly behind the last one.
        let now = timestamp_ms.max(self.last_ms).max(origin);
        let dt_ms = if self.next_index == 0 { 0.0 } else { now - self.last_ms };
        self.last_ms = now;

        let frame = Frame {
            index: self.next_index,
            dt_s: dt_ms / 1000.0,
            time: Time::from_millis(now - origin),
        };
        self.next_index += 1;
        frame
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
