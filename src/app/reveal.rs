// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One-shot scroll reveal.
//!
//! An `animate-on-scroll` element gains `animate-in` the first time at least a
//! tenth of it is inside the viewport. The class is never taken away again; the
//! class itself is the "already revealed" record.

use super::App;

const WATCH_CLASS: &str = "animate-on-scroll";
const REVEALED_CLASS: &str = "animate-in";
const VISIBLE_THRESHOLD: f32 = 0.1;

impl App {
    /// Runs at attach and after every scroll or resize.
    pub(crate) fn run_reveal_pass(&mut self) {
        for node in self.doc.all_by_class(WATCH_CLASS) {
            if self.doc.has_class(node, REVEALED_CLASS) {
                continue;
            }
            if self.doc.visible_fraction(node) >= VISIBLE_THRESHOLD {
                self.doc.add_class(node, REVEALED_CLASS);
            }
        }
    }
}
