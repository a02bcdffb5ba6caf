use serde::{Deserialize, Serialize};

use crate::counter::CounterStrategy;
use crate::reveal::GateOptions;
use crate::tracker::ProgressSource;
use crate::viewport::MOBILE_BREAKPOINT_PX;

/// Page behaviour knobs. Partial JSON falls back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub progress_source: ProgressSource,
    pub reveal: GateOptions,
    /// Stat counters reveal at a higher threshold than sections.
    pub counter_threshold: f64,
    pub counter: CounterStrategy,
    pub mobile_breakpoint_px: f64,
    pub stagger_step_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            progress_source: ProgressSource::default(),
            reveal: GateOptions::default(),
            counter_threshold: 0.5,
            counter: CounterStrategy::default(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            stagger_step_ms: 100.0,
        }
    }
}

impl PageConfig {
    pub fn counter_gate(&self) -> GateOptions {
        GateOptions {
            threshold: self.counter_threshold,
            ..self.reveal.clone()
        }
    }
}
