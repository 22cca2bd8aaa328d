//! Single-shot readiness latch

use leptos::prelude::*;

/// A boolean flag that transitions unset -> set exactly once.
///
/// Several competing signals may try to trip it (a DOM event, a fallback
/// timer); the first wins and later arrivals are no-ops. The guard is the
/// latch itself, not listener or timer removal, so a late timer firing after
/// the event - or after the owning page was torn down - has no effect.
#[derive(Clone, Copy)]
pub struct Latch(RwSignal<bool>);

impl Latch {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    /// Trip the latch. Idempotent; silent no-op once set or after the owning
    /// reactive scope was disposed.
    pub fn trip(&self) {
        if self.0.try_get_untracked() == Some(false) {
            self.0.try_set(true);
        }
    }

    /// Reactive read; subscribes the caller to the unset -> set transition.
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    pub fn is_set_untracked(&self) -> bool {
        self.0.get_untracked()
    }
}

impl Default for Latch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let latch = Latch::new();
        assert!(!latch.is_set_untracked());
    }

    #[test]
    fn test_trips_once_and_never_reverts() {
        let latch = Latch::new();
        latch.trip();
        assert!(latch.is_set_untracked());

        // Losing signal arrives later; nothing changes.
        latch.trip();
        latch.trip();
        assert!(latch.is_set_untracked());
    }
}
