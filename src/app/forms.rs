// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Declarative form validation.
//!
//! Opt-in per form via `data-validate`. Rules run in a fixed order per field
//! (required, then email shape, then minimum length) and only the first failing
//! rule's message is rendered. Revalidation always clears the previous error
//! first, so a field carries at most one error node.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Element, NodeId};

use super::{App, Effect};

const VALIDATE_ATTR: &str = "data-validate";
const MIN_LENGTH_ATTR: &str = "data-min-length";
const REQUIRED_ATTR: &str = "required";
const TYPE_ATTR: &str = "type";
const ERROR_CLASS: &str = "error";
const ERROR_NODE_CLASS: &str = "field-error";

pub const REQUIRED_MESSAGE: &str = "Este campo es requerido";
pub const EMAIL_MESSAGE: &str = "Ingrese un email v\u{e1}lido";

const FIELD_TAGS: [&str; 3] = ["input", "select", "textarea"];

fn min_length_message(min: usize) -> String {
    format!("M\u{ed}nimo {min} caracteres")
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn is_field(el: &Element) -> bool {
    FIELD_TAGS.contains(&el.tag())
}

impl App {
    /// Blur validates the single field, when it belongs to a validated form.
    pub(crate) fn on_blur(&mut self, field: NodeId) {
        if !self.doc.element(field).is_some_and(is_field) {
            return;
        }
        let validated = self
            .doc
            .ancestors_inclusive(field)
            .any(|node| {
                self.doc
                    .element(node)
                    .is_some_and(|el| el.tag() == "form" && el.has_attr(VALIDATE_ATTR))
            });
        if validated {
            self.validate_field(field);
        }
    }

    /// Submit validates every field of a validated form; only a clean form
    /// produces the submit effect. Forms without the marker pass through.
    pub(crate) fn on_submit(&mut self, form: NodeId) {
        let Some(el) = self.doc.element(form) else {
            return;
        };
        if el.has_attr(VALIDATE_ATTR) && !self.validate_form(form) {
            return;
        }
        self.effects.push(Effect::SubmitForm { form });
    }

    /// Validates all fields, not just until the first failure, so every field
    /// shows its own message at once.
    pub fn validate_form(&mut self, form: NodeId) -> bool {
        let fields: Vec<NodeId> = self
            .doc
            .select(is_field)
            .into_iter()
            .filter(|field| self.doc.contains(form, *field))
            .collect();
        let mut valid = true;
        for field in fields {
            if !self.validate_field(field) {
                valid = false;
            }
        }
        valid
    }

    pub fn validate_field(&mut self, field: NodeId) -> bool {
        self.clear_field_error(field);
        let Some(el) = self.doc.element(field) else {
            return true;
        };

        let value = el.value().trim().to_owned();
        let required = el.has_attr(REQUIRED_ATTR);
        let is_email = el.attr(TYPE_ATTR) == Some("email");
        // An unparseable minimum length never fails, like the original page.
        let min_length = el.attr(MIN_LENGTH_ATTR).and_then(|raw| raw.parse::<usize>().ok());

        let mut failure: Option<String> = None;
        if required && value.is_empty() {
            failure = Some(REQUIRED_MESSAGE.to_owned());
        }
        if failure.is_none() && !value.is_empty() && is_email && !email_pattern().is_match(&value) {
            failure = Some(EMAIL_MESSAGE.to_owned());
        }
        if failure.is_none() && !value.is_empty() {
            if let Some(min) = min_length {
                if value.chars().count() < min {
                    failure = Some(min_length_message(min));
                }
            }
        }

        match failure {
            Some(message) => {
                self.show_field_error(field, &message);
                false
            }
            None => true,
        }
    }

    fn show_field_error(&mut self, field: NodeId, message: &str) {
        self.doc.add_class(field, ERROR_CLASS);
        let parent = self.doc.parent(field).unwrap_or(self.doc.body());
        self.doc.append(
            parent,
            Element::new("div").with_class(ERROR_NODE_CLASS).with_text(message),
        );
    }

    fn clear_field_error(&mut self, field: NodeId) {
        self.doc.remove_class(field, ERROR_CLASS);
        let Some(parent) = self.doc.parent(field) else {
            return;
        };
        let stale = self
            .doc
            .select(|el| el.has_class(ERROR_NODE_CLASS))
            .into_iter()
            .find(|node| self.doc.contains(parent, *node));
        if let Some(node) = stale {
            self.doc.remove(node);
        }
    }
}
