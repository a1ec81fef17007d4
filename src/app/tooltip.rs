// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hover tooltips.
//!
//! At most one tooltip node exists at a time; the lifecycle is an explicit
//! entering -> shown -> fading machine so a hover-enter during a fade replaces
//! the old node instead of stacking a duplicate next to it.

use crate::model::{Element, NodeId, Rect};
use crate::sched::TimerId;

use super::{App, TimerAction};

const TOOLTIP_ATTR: &str = "data-tooltip";
const TOOLTIP_CLASS: &str = "tooltip-modern";
const SHOW_CLASS: &str = "show";

/// The `show` class lands one beat after creation so the entrance transition runs.
const SHOW_DELAY_MS: u64 = 10;
const FADE_MS: u64 = 200;
const TRIGGER_GAP_PX: f32 = 8.0;

// Nominal glyph metrics; the document model has no layout engine, and the
// shell re-measures when it draws.
const GLYPH_WIDTH_PX: f32 = 7.0;
const PADDING_PX: f32 = 16.0;
const HEIGHT_PX: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TooltipPhase {
    Entering,
    Shown,
    Fading,
}

#[derive(Debug)]
pub(crate) struct TooltipState {
    node: NodeId,
    phase: TooltipPhase,
    timer: TimerId,
}

impl App {
    pub(crate) fn on_hover_enter(&mut self, target: NodeId) {
        let Some(text) = self.doc.attr(target, TOOLTIP_ATTR).map(str::to_owned) else {
            return;
        };
        self.show_tooltip(target, &text);
    }

    pub(crate) fn on_hover_leave(&mut self, target: NodeId) {
        if self.doc.attr(target, TOOLTIP_ATTR).is_none() {
            return;
        }
        self.hide_tooltip();
    }

    /// Creates the tooltip node centered above the trigger. Any previous
    /// tooltip is removed first, whatever phase it was in.
    pub fn show_tooltip(&mut self, trigger: NodeId, text: &str) {
        if let Some(prev) = self.tooltip.take() {
            self.timers.cancel(prev.timer);
            self.doc.remove(prev.node);
        }
        let Some(trigger_rect) = self.doc.element(trigger).map(|el| el.rect()) else {
            return;
        };

        let width = text.chars().count() as f32 * GLYPH_WIDTH_PX + PADDING_PX;
        let rect = Rect::new(
            trigger_rect.center_x() - width / 2.0,
            trigger_rect.y - HEIGHT_PX - TRIGGER_GAP_PX,
            width,
            HEIGHT_PX,
        );
        let body = self.doc.body();
        let node = self.doc.append(
            body,
            Element::new("div").with_class(TOOLTIP_CLASS).with_text(text).with_rect(rect),
        );
        let timer = self.timers.schedule(self.now_ms, SHOW_DELAY_MS, TimerAction::TooltipShow { node });
        self.tooltip = Some(TooltipState {
            node,
            phase: TooltipPhase::Entering,
            timer,
        });
    }

    /// Starts the fade; the node comes out of the document [`FADE_MS`] later.
    /// Already-fading tooltips are left alone.
    pub fn hide_tooltip(&mut self) {
        let Some(state) = &self.tooltip else {
            return;
        };
        if state.phase == TooltipPhase::Fading {
            return;
        }
        let node = state.node;
        let pending = state.timer;
        self.timers.cancel(pending);
        self.doc.remove_class(node, SHOW_CLASS);
        let timer = self.timers.schedule(self.now_ms, FADE_MS, TimerAction::TooltipRemove { node });
        if let Some(state) = self.tooltip.as_mut() {
            state.phase = TooltipPhase::Fading;
            state.timer = timer;
        }
    }

    pub(crate) fn tooltip_show_due(&mut self, node: NodeId) {
        let entering = self
            .tooltip
            .as_ref()
            .is_some_and(|state| state.node == node && state.phase == TooltipPhase::Entering);
        if !entering {
            return;
        }
        self.doc.add_class(node, SHOW_CLASS);
        if let Some(state) = self.tooltip.as_mut() {
            state.phase = TooltipPhase::Shown;
        }
    }

    pub(crate) fn tooltip_remove_due(&mut self, node: NodeId) {
        if self.tooltip.as_ref().is_some_and(|state| state.node == node) {
            self.tooltip = None;
        }
        self.doc.remove(node);
    }
}
