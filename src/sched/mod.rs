// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic timer wheel.
//!
//! All time-driven behavior (debounce windows, fade-outs, the stats poll, number
//! animation steps) runs through [`Timers`] against a caller-supplied millisecond
//! clock, so tests drive virtual time and the shell drives wall-clock time. There is
//! no background thread; the owner calls [`Timers::due`] from its tick.

use std::fmt;

/// Handle to a scheduled timer. Ids are unique for the lifetime of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    id: TimerId,
    deadline_ms: u64,
    period_ms: Option<u64>,
    action: T,
}

/// One-shot and repeating timers keyed by an opaque action value.
#[derive(Debug, Clone)]
pub struct Timers<T> {
    next_id: u64,
    entries: Vec<TimerEntry<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Arms a one-shot timer `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, action: T) -> TimerId {
        self.insert(now_ms.saturating_add(delay_ms), None, action)
    }

    /// Arms a repeating timer with its first firing one period after `now_ms`.
    ///
    /// A zero period is clamped to one millisecond; a timer that is due at its
    /// own rescheduled deadline would otherwise never drain.
    pub fn schedule_repeating(&mut self, now_ms: u64, period_ms: u64, action: T) -> TimerId {
        let period_ms = period_ms.max(1);
        self.insert(now_ms.saturating_add(period_ms), Some(period_ms), action)
    }

    /// Cancels the timer; returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Earliest deadline currently armed, if any. Lets an owner replay timers
    /// deadline by deadline so cascades (a fade scheduling its removal) land at
    /// their true virtual times.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.deadline_ms).min()
    }

    fn insert(&mut self, deadline_ms: u64, period_ms: Option<u64>, action: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline_ms,
            period_ms,
            action,
        });
        id
    }
}

impl<T: Clone> Timers<T> {
    /// Fires everything due at `now_ms`, in deadline order (insertion order on ties).
    ///
    /// One-shot timers are consumed. Repeating timers fire once per call and
    /// collapse missed periods: after a long gap the next deadline is realigned
    /// past `now_ms` rather than replayed for every skipped period.
    pub fn due(&mut self, now_ms: u64) -> Vec<(TimerId, T)> {
        let mut fired: Vec<(u64, TimerId, T)> = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.deadline_ms > now_ms {
                return true;
            }
            fired.push((entry.deadline_ms, entry.id, entry.action.clone()));
            match entry.period_ms {
                Some(period) => {
                    while entry.deadline_ms <= now_ms {
                        entry.deadline_ms += period;
                    }
                    true
                }
                None => false,
            }
        });
        fired.sort_by_key(|(deadline, id, _)| (*deadline, *id));
        fired.into_iter().map(|(_, id, action)| (id, action)).collect()
    }
}
