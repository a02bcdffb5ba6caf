use runtime::Subscription;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateOptions {
    /// Visible fraction of the element that counts as "on screen".
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
    /// Fire once and stop observing.
    pub sticky: bool,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            sticky: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GatePhase {
    /// No observer attached (not mounted, or target missing).
    Unobserved,
    /// Observer attached, element not on screen.
    Observing,
    /// Non-sticky only: on screen, still observing.
    Visible,
    /// Sticky only: fired once, observer released. Terminal.
    Triggered,
}

/// Boolean "has this element been seen" signal fed by intersection ratios.
///
/// The gate owns the observer registration as a `Subscription`, so it is
/// released when a sticky gate fires, on `unmount`, or when the gate is
/// dropped.
#[derive(Debug)]
pub struct VisibilityGate {
    options: GateOptions,
    phase: GatePhase,
    observer: Option<Subscription>,
}

impl VisibilityGate {
    pub fn new(options: GateOptions) -> Self {
        Self {
            options,
            phase: GatePhase::Unobserved,
            observer: None,
        }
    }

    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, GatePhase::Visible | GatePhase::Triggered)
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Attach the observer for the target. `None` means the target element
    /// is absent; the gate then stays unobserved.
    pub fn mount(&mut self, observer: Option<Subscription>) {
        if self.phase != GatePhase::Unobserved {
            return;
        }
        let Some(observer) = observer else {
            tracing::debug!("reveal target missing; gate left unobserved");
            return;
        };
        self.observer = Some(observer);
        self.phase = GatePhase::Observing;
    }

    pub fn crosses(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.options.threshold
    }

    /// Feed one intersection callback. Returns the visibility flag after the
    /// event.
    pub fn on_intersection(&mut self, ratio: f64) -> bool {
        let on_screen = self.crosses(ratio);
        let next = match (self.phase, on_screen, self.options.sticky) {
            (GatePhase::Unobserved | GatePhase::Triggered, _, _) => self.phase,
            (GatePhase::Observing, true, true) => GatePhase::Triggered,
            (GatePhase::Observing, true, false) => GatePhase::Visible,
            (GatePhase::Visible, false, _) => GatePhase::Observing,
            (phase, _, _) => phase,
        };

        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, ratio, "visibility gate transition");
            self.phase = next;
        }
        if self.phase == GatePhase::Triggered {
            self.release();
        }
        self.is_visible()
    }

    /// Detach on teardown. A triggered gate stays triggered; anything else
    /// returns to unobserved.
    pub fn unmount(&mut self) {
        self.release();
        if self.phase != GatePhase::Triggered {
            self.phase = GatePhase::Unobserved;
        }
    }

    fn release(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.release();
        }
    }
}

/// Transition delay for the `index`-th item of a staggered reveal.
pub fn stagger_delay_ms(base_ms: f64, index: usize, step_ms: f64) -> f64 {
    base_ms + index as f64 * step_ms
}

#[cfg(test)]
mod tests {
    use super::{GateOptions, GatePhase, VisibilityGate, stagger_delay_ms};
    use pretty_assertions::assert_eq;
    use runtime::Subscription;
    use std::cell::Cell;
    use std::rc::Rc;

    fn observer() -> (Subscription, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let r = released.clone();
        (
            Subscription::new("intersection-observer", move || r.set(r.get() + 1)),
            released,
        )
    }

    fn run(gate: &mut VisibilityGate, ratios: &[f64]) -> Vec<bool> {
        ratios.iter().map(|r| gate.on_intersection(*r)).collect()
    }

    #[test]
    fn sticky_gate_fires_once_and_releases() {
        let (sub, released) = observer();
        let mut gate = VisibilityGate::new(GateOptions::default());
        gate.mount(Some(sub));
        assert_eq!(gate.phase(), GatePhase::Observing);

        assert_eq!(run(&mut gate, &[0.0, 0.5, 0.0]), vec![false, true, true]);
        assert_eq!(gate.phase(), GatePhase::Triggered);
        assert!(!gate.is_observing());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn non_sticky_gate_follows_the_element() {
        let (sub, released) = observer();
        let mut gate = VisibilityGate::new(GateOptions {
            sticky: false,
            ..GateOptions::default()
        });
        gate.mount(Some(sub));

        assert_eq!(run(&mut gate, &[0.0, 0.5, 0.0]), vec![false, true, false]);
        assert_eq!(gate.phase(), GatePhase::Observing);
        assert!(gate.is_observing());
        assert_eq!(released.get(), 0);

        gate.unmount();
        assert_eq!(released.get(), 1);
        assert_eq!(gate.phase(), GatePhase::Unobserved);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut gate = VisibilityGate::new(GateOptions {
            threshold: 0.5,
            ..GateOptions::default()
        });
        assert!(!gate.crosses(0.49));
        assert!(gate.crosses(0.5));
        let (sub, _) = observer();
        gate.mount(Some(sub));
        assert!(!gate.on_intersection(0.3));
        assert!(gate.on_intersection(0.5));
    }

    #[test]
    fn missing_target_is_a_noop() {
        let mut gate = VisibilityGate::new(GateOptions::default());
        gate.mount(None);
        assert_eq!(gate.phase(), GatePhase::Unobserved);
        assert!(!gate.on_intersection(1.0));
        gate.unmount();
        assert_eq!(gate.phase(), GatePhase::Unobserved);
    }

    #[test]
    fn dropping_an_observing_gate_releases_it() {
        let (sub, released) = observer();
        let mut gate = VisibilityGate::new(GateOptions::default());
        gate.mount(Some(sub));
        drop(gate);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn early_unmount_releases_before_trigger() {
        let (sub, released) = observer();
        let mut gate = VisibilityGate::new(GateOptions::default());
        gate.mount(Some(sub));
        gate.unmount();
        assert_eq!(released.get(), 1);
        assert!(!gate.on_intersection(1.0));
    }

    #[test]
    fn second_mount_is_ignored_while_observing() {
        let (first, first_released) = observer();
        let (second, second_released) = observer();
        let mut gate = VisibilityGate::new(GateOptions::default());
        gate.mount(Some(first));
        gate.mount(Some(second));
        // The rejected registration is dropped immediately.
        assert_eq!(second_released.get(), 1);
        assert_eq!(first_released.get(), 0);
    }

    #[test]
    fn stagger_adds_a_step_per_item() {
        assert_eq!(stagger_delay_ms(0.0, 0, 100.0), 0.0);
        assert_eq!(stagger_delay_ms(200.0, 3, 100.0), 500.0);
    }
}
