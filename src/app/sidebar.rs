// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sidebar toggling and the responsive breakpoint reset.
//!
//! Each viewport class owns its own pair of style classes:
//! mobile slides the sidebar (`mobile-open`), tablet expands it over compressed
//! content (`expanded`/`compressed`), desktop collapses it next to expanded
//! content (`collapsed`/`expanded`). The resize reset clears a class's state as
//! soon as the viewport leaves it, so no two breakpoints' classes coexist.

use crate::model::{Breakpoint, NodeId, MOBILE_BREAKPOINT_PX, TABLET_BREAKPOINT_PX};

use super::App;

const SIDEBAR_CLASS: &str = "sidebar";
const MAIN_CONTENT_CLASS: &str = "main-content";
const TOGGLE_CLASS: &str = "sidebar-toggle";

const MOBILE_OPEN: &str = "mobile-open";
const SIDEBAR_EXPANDED: &str = "expanded";
const CONTENT_COMPRESSED: &str = "compressed";
const SIDEBAR_COLLAPSED: &str = "collapsed";
const CONTENT_EXPANDED: &str = "expanded";

impl App {
    /// Click routing for the sidebar: a click on the toggle flips the state for
    /// the current breakpoint; at mobile width, a click outside both the
    /// sidebar and the toggle closes the slide-out.
    pub(crate) fn sidebar_click(&mut self, target: NodeId) {
        let Some(sidebar) = self.doc.first_by_class(SIDEBAR_CLASS) else {
            log::debug!("p\u{e1}gina sin .{SIDEBAR_CLASS}; clic ignorado");
            return;
        };
        let Some(toggle) = self.doc.first_by_class(TOGGLE_CLASS) else {
            log::debug!("p\u{e1}gina sin .{TOGGLE_CLASS}; clic ignorado");
            return;
        };

        if self.doc.contains(toggle, target) {
            self.toggle_sidebar();
            return;
        }

        let mobile = Breakpoint::of(self.doc.viewport().width) == Breakpoint::Mobile;
        if mobile && !self.doc.contains(sidebar, target) {
            self.doc.remove_class(sidebar, MOBILE_OPEN);
        }
    }

    pub(crate) fn toggle_sidebar(&mut self) {
        let Some(sidebar) = self.doc.first_by_class(SIDEBAR_CLASS) else {
            return;
        };
        let main = self.doc.first_by_class(MAIN_CONTENT_CLASS);

        match Breakpoint::of(self.doc.viewport().width) {
            Breakpoint::Mobile => {
                self.doc.toggle_class(sidebar, MOBILE_OPEN);
            }
            Breakpoint::Tablet => {
                self.doc.toggle_class(sidebar, SIDEBAR_EXPANDED);
                if let Some(main) = main {
                    self.doc.toggle_class(main, CONTENT_COMPRESSED);
                }
            }
            Breakpoint::Desktop => {
                self.doc.toggle_class(sidebar, SIDEBAR_COLLAPSED);
                if let Some(main) = main {
                    self.doc.toggle_class(main, CONTENT_EXPANDED);
                }
            }
        }
    }

    /// Resize reset: leaving mobile clears the slide-out, leaving tablet clears
    /// the expanded/compressed pair. Desktop state persists across resizes, as
    /// on the original page.
    pub(crate) fn reset_breakpoint_state(&mut self) {
        let width = self.doc.viewport().width;
        let Some(sidebar) = self.doc.first_by_class(SIDEBAR_CLASS) else {
            return;
        };

        if width > MOBILE_BREAKPOINT_PX {
            self.doc.remove_class(sidebar, MOBILE_OPEN);
        }
        if width > TABLET_BREAKPOINT_PX {
            self.doc.remove_class(sidebar, SIDEBAR_EXPANDED);
            if let Some(main) = self.doc.first_by_class(MAIN_CONTENT_CLASS) {
                self.doc.remove_class(main, CONTENT_COMPRESSED);
            }
        }
    }
}
