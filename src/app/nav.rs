// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation highlighting and same-page anchor scrolling.

use crate::model::NodeId;

use super::{App, Effect};

const NAV_LINK_CLASS: &str = "nav-link";
const ACTIVE_CLASS: &str = "active";
const HREF_ATTR: &str = "href";

impl App {
    /// Marks each `nav-link` active when the current path contains its href.
    /// The root href `/` would match every path, so it only matches exactly.
    pub(crate) fn apply_active_navigation(&mut self) {
        for link in self.doc.all_by_class(NAV_LINK_CLASS) {
            let Some(href) = self.doc.attr(link, HREF_ATTR).map(str::to_owned) else {
                continue;
            };
            let active = if href == "/" {
                self.path == "/"
            } else {
                self.path.contains(&href)
            };
            if active {
                self.doc.add_class(link, ACTIVE_CLASS);
            }
        }
    }

    /// Consumes clicks on `a[href^="#"]` and scrolls the fragment's element to
    /// block start. An empty fragment is consumed without scrolling.
    pub(crate) fn anchor_click(&mut self, target: NodeId) {
        let Some(anchor) = self
            .doc
            .ancestors_inclusive(target)
            .find(|node| self.doc.element(*node).is_some_and(|el| el.tag() == "a"))
        else {
            return;
        };
        let Some(href) = self.doc.attr(anchor, HREF_ATTR) else {
            return;
        };
        let Some(fragment) = href.strip_prefix('#') else {
            return;
        };
        if fragment.is_empty() {
            return;
        }
        let Some(dest) = self.doc.by_id(fragment) else {
            return;
        };

        let top = self.doc.element(dest).map(|el| el.rect().y).unwrap_or(0.0);
        self.doc.scroll_to(top);
        self.effects.push(Effect::ScrollTo { target: dest });
        self.run_reveal_pass();
    }
}
