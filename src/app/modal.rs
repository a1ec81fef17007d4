// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Modal open/close.
//!
//! A modal is visible while it carries `show`; `modal-open` on the body blocks
//! background scrolling for as long as any modal is up. Closing is always
//! collective: a close control or Escape takes down every shown modal at once.

use crate::model::NodeId;

use super::App;

const MODAL_CLASS: &str = "modal";
const SHOW_CLASS: &str = "show";
const BODY_OPEN_CLASS: &str = "modal-open";
const TRIGGER_ATTR: &str = "data-modal-target";
const CLOSE_CLASS: &str = "modal-close";

impl App {
    pub(crate) fn modal_trigger_click(&mut self, target: NodeId) {
        let Some(trigger) = self
            .doc
            .ancestors_inclusive(target)
            .find(|node| self.doc.element(*node).is_some_and(|el| el.has_attr(TRIGGER_ATTR)))
        else {
            return;
        };
        let Some(modal_id) = self.doc.attr(trigger, TRIGGER_ATTR).map(str::to_owned) else {
            return;
        };
        self.open_modal(&modal_id);
    }

    pub(crate) fn modal_close_click(&mut self, target: NodeId) {
        let close_hit = self
            .doc
            .ancestors_inclusive(target)
            .any(|node| self.doc.has_class(node, CLOSE_CLASS));
        if close_hit {
            self.close_all_modals();
        }
    }

    pub fn open_modal(&mut self, modal_id: &str) {
        let Some(modal) = self.doc.by_id(modal_id) else {
            log::debug!("modal #{modal_id} no existe; se ignora");
            return;
        };
        self.doc.add_class(modal, SHOW_CLASS);
        let body = self.doc.body();
        self.doc.add_class(body, BODY_OPEN_CLASS);
    }

    pub fn close_all_modals(&mut self) {
        for modal in self
            .doc
            .select(|el| el.has_class(MODAL_CLASS) && el.has_class(SHOW_CLASS))
        {
            self.doc.remove_class(modal, SHOW_CLASS);
        }
        let body = self.doc.body();
        self.doc.remove_class(body, BODY_OPEN_CLASS);
    }
}
