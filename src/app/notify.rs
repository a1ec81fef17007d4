// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transient notifications.
//!
//! Creating a notification removes every existing one, so the document never
//! holds more than a single notification node. Dismissal has two triggers, the
//! auto timer and the close control; the visible -> fading -> removed lifecycle
//! guards them against double removal.

use crate::model::{Element, NodeId};
use crate::sched::TimerId;

use super::{App, TimerAction};

const NOTIFICATION_CLASS: &str = "notification";
const SHOW_CLASS: &str = "show";
const FADE_OUT_CLASS: &str = "fade-out";
const CLOSE_CLASS: &str = "notification-close";

pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5_000;
const FADE_MS: u64 = 300;

/// Severity icon tokens; unknown severities fall back to info but keep their
/// own `notification-<severity>` style class.
fn severity_icon(severity: &str) -> &'static str {
    match severity {
        "success" => "fa-check-circle",
        "warning" => "fa-exclamation-triangle",
        "danger" => "fa-times-circle",
        _ => "fa-info-circle",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotifyPhase {
    Visible,
    Fading,
}

#[derive(Debug)]
pub(crate) struct NotificationState {
    node: NodeId,
    phase: NotifyPhase,
    timer: TimerId,
}

impl App {
    /// Shows a notification, replacing any that exist.
    pub fn show_notification(&mut self, message: &str, severity: &str, duration_ms: u64) {
        if let Some(prev) = self.notification.take() {
            self.timers.cancel(prev.timer);
        }
        for node in self.doc.all_by_class(NOTIFICATION_CLASS) {
            self.doc.remove(node);
        }

        let body = self.doc.body();
        let node = self.doc.append(
            body,
            Element::new("div")
                .with_class(NOTIFICATION_CLASS)
                .with_class(format!("notification-{severity}").as_str())
                .with_class(SHOW_CLASS),
        );
        let content = self.doc.append(node, Element::new("div").with_class("notification-content"));
        self.doc.append(
            content,
            Element::new("div")
                .with_class("notification-icon")
                .with_text(severity_icon(severity)),
        );
        let text_body = self.doc.append(content, Element::new("div").with_class("notification-body"));
        self.doc.append(
            text_body,
            Element::new("div").with_class("notification-message").with_text(message),
        );
        self.doc.append(
            content,
            Element::new("button").with_class(CLOSE_CLASS).with_text("\u{d7}"),
        );

        let timer = self.timers.schedule(self.now_ms, duration_ms, TimerAction::NotifyDismiss { node });
        self.notification = Some(NotificationState {
            node,
            phase: NotifyPhase::Visible,
            timer,
        });
    }

    /// Click routing: a hit on the close control dismisses early through the
    /// same fade as the auto timer.
    pub(crate) fn notification_click(&mut self, target: NodeId) {
        let Some(state) = &self.notification else {
            return;
        };
        if !self.doc.contains(state.node, target) {
            return;
        }
        let close_hit = self
            .doc
            .ancestors_inclusive(target)
            .any(|node| self.doc.has_class(node, CLOSE_CLASS));
        if close_hit {
            self.dismiss_notification();
        }
    }

    /// Begins the fade unless one is already underway.
    pub fn dismiss_notification(&mut self) {
        let Some(state) = &self.notification else {
            return;
        };
        if state.phase == NotifyPhase::Fading {
            return;
        }
        let node = state.node;
        let pending = state.timer;
        self.timers.cancel(pending);
        self.doc.add_class(node, FADE_OUT_CLASS);
        let timer = self.timers.schedule(self.now_ms, FADE_MS, TimerAction::NotifyRemove { node });
        if let Some(state) = self.notification.as_mut() {
            state.phase = NotifyPhase::Fading;
            state.timer = timer;
        }
    }

    pub(crate) fn notification_dismiss_due(&mut self, node: NodeId) {
        let visible = self
            .notification
            .as_ref()
            .is_some_and(|state| state.node == node && state.phase == NotifyPhase::Visible);
        if visible {
            self.dismiss_notification();
        }
    }

    pub(crate) fn notification_remove_due(&mut self, node: NodeId) {
        if self.notification.as_ref().is_some_and(|state| state.node == node) {
            self.notification = None;
        }
        self.doc.remove(node);
    }
}
