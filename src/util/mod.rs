// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Timing-control wrappers with an explicit clock.
//!
//! Both types take the current time as a plain millisecond count instead of reading a
//! clock themselves, so the controller's virtual time and the shell's wall time go
//! through the same code.

/// Trailing-edge debounce: repeated calls keep pushing the deadline out, and only
/// the latest call's value survives.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Records `value` and re-arms the window from `now_ms`.
    pub fn call(&mut self, now_ms: u64, value: T) {
        self.pending = Some((now_ms.saturating_add(self.wait_ms), value));
    }

    /// Yields the pending value once the window has elapsed without another call.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now_ms => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Leading-edge throttle: the first call passes immediately, calls inside the
/// cooldown are dropped (not queued), and the window restarts on the next
/// allowed call.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: u64,
    open_at_ms: Option<u64>,
}

impl Throttle {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            open_at_ms: None,
        }
    }

    /// Whether a call at `now_ms` passes through.
    pub fn allow(&mut self, now_ms: u64) -> bool {
        match self.open_at_ms {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at_ms = Some(now_ms.saturating_add(self.limit_ms));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Debouncer, Throttle};

    #[test]
    fn debounce_collapses_a_burst_to_the_last_value() {
        let mut debouncer = Debouncer::new(300);
        for (at, value) in [(0, "a"), (50, "b"), (120, "c"), (180, "d"), (250, "e")] {
            debouncer.call(at, value);
        }

        // The last call at t=250 re-armed the window; nothing fires before t=550.
        assert_eq!(debouncer.poll(549), None);
        assert_eq!(debouncer.poll(550), Some("e"));
        assert_eq!(debouncer.poll(10_000), None);
    }

    #[test]
    fn debounce_fires_once_per_quiet_period() {
        let mut debouncer = Debouncer::new(300);
        debouncer.call(0, 1);
        assert_eq!(debouncer.poll(300), Some(1));
        debouncer.call(400, 2);
        assert_eq!(debouncer.poll(700), Some(2));
    }

    #[test]
    fn throttle_passes_immediately_then_drops_until_the_window_ends() {
        let mut throttle = Throttle::new(1000);
        let allowed: Vec<bool> = (0..10).map(|_| throttle.allow(0)).collect();

        assert_eq!(allowed.iter().filter(|a| **a).count(), 1);
        assert!(allowed[0]);
        assert!(!throttle.allow(999));
        assert!(throttle.allow(1001));
        // The allowed call at t=1001 opened a fresh cooldown.
        assert!(!throttle.allow(1500));
    }
}
