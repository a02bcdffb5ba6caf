use std::fmt;

/// Scoped ownership of an external event registration.
///
/// The release callback runs exactly once: on `release`, or on drop if the
/// owner goes away first. Listeners and observers are wrapped in one of
/// these so teardown cannot leak them on any exit path.
pub struct Subscription {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now instead of waiting for drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(subscription = self.label, "released");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Subscription;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(label: &'static str) -> (Subscription, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (Subscription::new(label, move || c.set(c.get() + 1)), count)
    }

    #[test]
    fn releases_on_drop() {
        let (sub, count) = counting("scroll");
        assert!(sub.is_active());
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_release_runs_once() {
        let (sub, count) = counting("observer");
        sub.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn releases_when_owner_unwinds_early() {
        let (sub, count) = counting("resize");
        let owner: Option<Subscription> = Some(sub);
        let result: Result<(), ()> = (|| {
            let _held = owner;
            Err(())
        })();
        assert!(result.is_err());
        assert_eq!(count.get(), 1);
    }
}
