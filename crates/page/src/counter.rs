use runtime::clamp_progress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CounterStrategy {
    /// Count from 0 to the target over `duration_ms` once triggered.
    Timed { duration_ms: f64 },
    /// Count tracks the section's own scroll progress, both directions.
    ScrollCoupled,
}

impl Default for CounterStrategy {
    fn default() -> Self {
        CounterStrategy::Timed {
            duration_ms: 2000.0,
        }
    }
}

/// Integer counter animated toward `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    strategy: CounterStrategy,
    started_at_ms: Option<f64>,
    triggered: bool,
    value: u64,
}

impl CountUp {
    pub fn new(target: u64, strategy: CounterStrategy) -> Self {
        Self {
            target,
            strategy,
            started_at_ms: None,
            triggered: false,
            value: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Arm a timed counter. Later calls are ignored so the animation runs
    /// once.
    pub fn trigger(&mut self) {
        if !self.triggered {
            tracing::debug!(target = self.target, "counter triggered");
            self.triggered = true;
        }
    }

    /// Timed strategy: sample at an animation-frame timestamp. The first
    /// sample after `trigger` fixes the start time.
    pub fn sample_at(&mut self, now_ms: f64) -> u64 {
        let CounterStrategy::Timed { duration_ms } = self.strategy else {
            return self.value;
        };
        if !self.triggered {
            return self.value;
        }
        let start = *self.started_at_ms.get_or_insert(now_ms);
        let progress = if duration_ms <= 0.0 {
            1.0
        } else {
            clamp_progress((now_ms - start) / duration_ms)
        };
        self.value = scaled(self.target, progress);
        self.value
    }

    /// Whether a timed counter still needs animation frames.
    pub fn is_running(&self) -> bool {
        matches!(self.strategy, CounterStrategy::Timed { .. })
            && self.triggered
            && self.value < self.target
    }

    /// Scroll-coupled strategy: map section progress straight to a count.
    pub fn sample_progress(&mut self, section_progress: f64) -> u64 {
        if self.strategy != CounterStrategy::ScrollCoupled {
            return self.value;
        }
        self.value = scaled(self.target, clamp_progress(section_progress));
        self.value
    }
}

fn scaled(target: u64, progress: f64) -> u64 {
    (target as f64 * progress).floor() as u64
}

/// One headline figure of the stats strip.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Stat {
    pub fn display(&self, count: u64) -> String {
        format!("{count}{}", self.suffix)
    }
}

pub const CONFERENCE_STATS: [Stat; 4] = [
    Stat {
        value: 500,
        suffix: "+",
        label: "Delegates Expected",
    },
    Stat {
        value: 9,
        suffix: "",
        label: "Committees",
    },
    Stat {
        value: 30,
        suffix: "+",
        label: "Countries Represented",
    },
    Stat {
        value: 3,
        suffix: "",
        label: "Days of Diplomacy",
    },
];
