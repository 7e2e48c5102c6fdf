//! Mount Guard
//!
//! Liveness flag shared between a component and the callbacks it hands to
//! the browser (listeners, timers, observers). The component flips it in
//! `on_cleanup`; callbacks check it before touching state, so nothing is
//! written after teardown even if the platform delivers one more event.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn mounted() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Run `f` only while mounted
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_mounted() {
            Some(f())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_no_writes_after_unmount() {
        let guard = MountGuard::mounted();
        let writes = Cell::new(0);
        let callback = {
            let guard = guard.clone();
            let writes = &writes;
            move || guard.run(|| writes.set(writes.get() + 1))
        };

        assert!(callback().is_some());
        guard.unmount();
        assert!(callback().is_none());
        assert!(callback().is_none());
        assert_eq!(writes.get(), 1);
    }
}
