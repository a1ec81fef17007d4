// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Page controller.
//!
//! One [`App`] per page. It owns the document, the timer wheel and the API client,
//! consumes [`PageEvent`]s from the embedding shell, and accumulates [`Effect`]s for the
//! shell to drain. Every behavior degrades by skipping itself when its markup is
//! missing; nothing here may take the whole controller down.
//!
//! Mirroring browser event semantics, a click runs through every interested behavior
//! in registration order. Handlers do not stop each other.

mod forms;
mod modal;
mod nav;
mod notify;
mod reveal;
mod search;
mod sidebar;
mod stats;
mod tooltip;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::api::{ApiClient, SearchRecord};
use crate::model::{Document, Key, NodeId, PageEvent};
use crate::sched::{TimerId, Timers};
use crate::util::Debouncer;

pub use forms::{EMAIL_MESSAGE, REQUIRED_MESSAGE};
pub use notify::DEFAULT_NOTIFICATION_DURATION_MS;
pub use search::{MIN_QUERY_CHARS, SEARCH_DEBOUNCE_MS};
pub use stats::STATS_POLL_INTERVAL_MS;

/// Route fragment that arms the periodic stats refresh.
const REPORTS_PATH: &str = "/informes/";

/// What a fired timer means. Timer payloads carry node handles, never borrowed
/// state; a fired action re-resolves its node and bails out when it is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimerAction {
    NotifyDismiss { node: NodeId },
    NotifyRemove { node: NodeId },
    TooltipShow { node: NodeId },
    TooltipRemove { node: NodeId },
    StatsPoll,
    AnimateStep { card: NodeId },
}

/// Outbound commands for the embedding shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A same-page anchor was followed; the shell may animate the scroll.
    ScrollTo { target: NodeId },
    /// A form passed validation (or opted out of it) and may be submitted.
    SubmitForm { form: NodeId },
    /// Search results for the collaborator that renders them.
    SearchResults { records: Vec<SearchRecord> },
}

pub struct App {
    doc: Document,
    path: String,
    api: Box<dyn ApiClient>,
    timers: Timers<TimerAction>,
    now_ms: u64,
    effects: Vec<Effect>,
    search: Debouncer<String>,
    notification: Option<notify::NotificationState>,
    tooltip: Option<tooltip::TooltipState>,
    animations: BTreeMap<NodeId, stats::NumberAnimation>,
}

impl App {
    /// Builds the controller and wires everything that runs at page-ready:
    /// active-navigation marking, the initial reveal pass, and the stats poll
    /// when the path is a reports route.
    pub fn new(doc: Document, path: String, api: Box<dyn ApiClient>, now_ms: u64) -> Self {
        let mut app = Self {
            doc,
            path,
            api,
            timers: Timers::new(),
            now_ms,
            effects: Vec::new(),
            search: Debouncer::new(SEARCH_DEBOUNCE_MS),
            notification: None,
            tooltip: None,
            animations: BTreeMap::new(),
        };
        app.apply_active_navigation();
        app.run_reveal_pass();
        if app.path.contains(REPORTS_PATH) {
            app.timers
                .schedule_repeating(app.now_ms, STATS_POLL_INTERVAL_MS, TimerAction::StatsPoll);
        }
        app
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Click { target } => self.on_click(target),
            PageEvent::KeyDown { key } => {
                if key == Key::Escape {
                    self.close_all_modals();
                }
            }
            PageEvent::Resize { width, height } => self.on_resize(width, height),
            PageEvent::HoverEnter { target } => self.on_hover_enter(target),
            PageEvent::HoverLeave { target } => self.on_hover_leave(target),
            PageEvent::Input { field, value } => self.on_input(field, value),
            PageEvent::Blur { field } => self.on_blur(field),
            PageEvent::Submit { form } => self.on_submit(form),
            PageEvent::Scroll { y } => self.on_scroll(y),
        }
    }

    /// Moves the clock forward and fires everything that came due on the way.
    ///
    /// Timers are replayed in deadline order with the virtual clock set to each
    /// deadline as it fires, so a timer armed by another timer (a fade
    /// scheduling its removal) lands at its true time even across a large jump.
    /// Time never moves backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        let target = self.now_ms.max(now_ms);
        while let Some(deadline) = self.timers.next_deadline() {
            if deadline > target {
                break;
            }
            self.now_ms = deadline.max(self.now_ms);
            for (id, action) in self.timers.due(self.now_ms) {
                self.on_timer(id, action);
            }
        }
        self.now_ms = target;
        if let Some(query) = self.search.poll(self.now_ms) {
            self.run_search(&query);
        }
    }

    /// Drains the accumulated shell commands.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    fn on_click(&mut self, target: NodeId) {
        if self.doc.element(target).is_none() {
            return;
        }
        self.notification_click(target);
        self.sidebar_click(target);
        self.anchor_click(target);
        self.modal_trigger_click(target);
        self.modal_close_click(target);
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.doc.set_viewport_size(width, height);
        self.reset_breakpoint_state();
        self.run_reveal_pass();
    }

    fn on_scroll(&mut self, y: f32) {
        self.doc.scroll_to(y);
        self.run_reveal_pass();
    }

    fn on_timer(&mut self, id: TimerId, action: TimerAction) {
        match action {
            TimerAction::NotifyDismiss { node } => self.notification_dismiss_due(node),
            TimerAction::NotifyRemove { node } => self.notification_remove_due(node),
            TimerAction::TooltipShow { node } => self.tooltip_show_due(node),
            TimerAction::TooltipRemove { node } => self.tooltip_remove_due(node),
            TimerAction::StatsPoll => self.refresh_stats(),
            TimerAction::AnimateStep { card } => self.animate_step(id, card),
        }
    }
}
