// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Periodic stats refresh and the counting animation.
//!
//! A refresh failure of any kind is logged and swallowed; the poll keeps its
//! cadence. Fresh metrics are matched positionally to the stat cards in
//! document order and each card counts toward its target in 20 linear steps.

use crate::api::StatsSnapshot;
use crate::format::leading_number;
use crate::model::NodeId;
use crate::sched::TimerId;

use super::{App, TimerAction};

const STATS_VALUE_CLASS: &str = "stats-value";

pub const STATS_POLL_INTERVAL_MS: u64 = 300_000;
const ANIMATION_STEPS: f64 = 20.0;
const ANIMATION_TICK_MS: u64 = 50;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberAnimation {
    target: f64,
    increment: f64,
    value: f64,
    timer: TimerId,
}

impl App {
    /// One refresh: fetch, then animate. Never propagates a failure.
    pub fn refresh_stats(&mut self) {
        match self.api.realtime_stats() {
            Ok(snapshot) => self.apply_stats(snapshot),
            Err(err) => log::warn!("auto-refresh no disponible: {err}"),
        }
    }

    fn apply_stats(&mut self, snapshot: StatsSnapshot) {
        let cards = self.doc.all_by_class(STATS_VALUE_CLASS);
        for (card, target) in cards.into_iter().zip(snapshot.metrics) {
            self.animate_number(card, target);
        }
    }

    /// Counts the card from its displayed value to `target`. A card already at
    /// the target is written once without arming a timer; an animation already
    /// in flight for the card is replaced.
    pub fn animate_number(&mut self, card: NodeId, target: f64) {
        if let Some(prev) = self.animations.remove(&card) {
            self.timers.cancel(prev.timer);
        }
        let Some(text) = self.doc.text(card) else {
            return;
        };
        let current = leading_number(text).unwrap_or(0.0);
        let increment = (target - current) / ANIMATION_STEPS;
        if increment == 0.0 {
            self.doc.set_text(card, format!("{target:.2}"));
            return;
        }
        let timer =
            self.timers
                .schedule_repeating(self.now_ms, ANIMATION_TICK_MS, TimerAction::AnimateStep { card });
        self.animations.insert(
            card,
            NumberAnimation {
                target,
                increment,
                value: current,
                timer,
            },
        );
    }

    /// One 50 ms step. Overshoot in either direction clamps to the target
    /// exactly and stops the timer; a card that has left the document stops it
    /// too, so a stale refresh cannot write into nothing.
    pub(crate) fn animate_step(&mut self, timer: TimerId, card: NodeId) {
        if self.doc.element(card).is_none() {
            self.timers.cancel(timer);
            self.animations.remove(&card);
            return;
        }
        let Some(anim) = self.animations.get_mut(&card) else {
            self.timers.cancel(timer);
            return;
        };

        anim.value += anim.increment;
        let reached = (anim.increment > 0.0 && anim.value >= anim.target)
            || (anim.increment < 0.0 && anim.value <= anim.target);
        if reached {
            anim.value = anim.target;
        }
        let text = format!("{:.2}", anim.value);
        self.doc.set_text(card, text);

        if reached {
            self.timers.cancel(timer);
            self.animations.remove(&card);
        }
    }
}
