// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Debounced search box.
//!
//! Input into `.search-input` re-arms a 300 ms window; when it closes, the
//! trimmed query goes to the search endpoint if it is long enough. Results are
//! handed to the embedder verbatim; rendering them is the collaborator's job.

use crate::model::NodeId;

use super::{App, Effect};

const SEARCH_INPUT_CLASS: &str = "search-input";

pub const SEARCH_DEBOUNCE_MS: u64 = 300;
pub const MIN_QUERY_CHARS: usize = 2;

impl App {
    pub(crate) fn on_input(&mut self, field: NodeId, value: String) {
        if self.doc.element(field).is_none() {
            return;
        }
        self.doc.set_value(field, value.clone());
        if self.doc.has_class(field, SEARCH_INPUT_CLASS) {
            self.search.call(self.now_ms, value);
        }
    }

    pub(crate) fn run_search(&mut self, raw: &str) {
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return;
        }
        match self.api.search(query) {
            Ok(records) => self.effects.push(Effect::SearchResults { records }),
            Err(err) => log::warn!("b\u{fa}squeda no disponible: {err}"),
        }
    }
}
