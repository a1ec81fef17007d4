// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arena-backed document tree.
//!
//! This is the page surface the controller runs against: elements with tags, classes,
//! attributes, text, input values and layout rects, held in a single owned arena. Queries
//! return nodes in document order (preorder). Removing a node frees its whole subtree;
//! stale `NodeId`s simply resolve to `None`, which is what lets timer callbacks guard
//! against elements that have left the document.

use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::viewport::Viewport;

/// Handle to an element in a [`Document`].
///
/// Ids are never reused within one document, so a handle kept across a removal
/// stays invalid instead of silently pointing at a newer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis-aligned layout box in CSS pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A single element: tag, optional id, classes, attributes, text, input value, rect.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: SmolStr,
    id: Option<SmolStr>,
    classes: SmallVec<[SmolStr; 4]>,
    attrs: BTreeMap<SmolStr, String>,
    text: String,
    value: String,
    rect: Rect,
}

impl Element {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: SmolStr::new(tag.as_ref()),
            id: None,
            classes: SmallVec::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            rect: Rect::default(),
        }
    }

    pub fn with_id(mut self, id: impl AsRef<str>) -> Self {
        self.id = Some(SmolStr::new(id.as_ref()));
        self
    }

    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        self.add_class(class.as_ref());
        self
    }

    pub fn with_attr(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.attrs.insert(SmolStr::new(name.as_ref()), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(SmolStr::new(class));
        }
    }

    /// Removes the class; returns whether it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(SmolStr::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(SmolStr::new(name), value.into());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 8]>,
}

/// Owned element tree plus viewport state.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    body: NodeId,
    viewport: Viewport,
}

impl Document {
    /// Creates a document holding only the `body` root.
    pub fn new(viewport: Viewport) -> Self {
        let body = Node {
            element: Element::new("body"),
            parent: None,
            children: SmallVec::new(),
        };
        Self {
            nodes: vec![Some(body)],
            body: NodeId(0),
            viewport,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    pub fn scroll_y(&self) -> f32 {
        self.viewport.scroll_y
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.viewport.scroll_y = y.max(0.0);
    }

    /// Appends `element` as the last child of `parent`. Returns the new handle.
    ///
    /// Appending under a stale parent attaches to the body instead; the caller
    /// asked for an element that no longer exists and the page must not lose
    /// the new node over it.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let parent = if self.get(parent).is_some() { parent } else { self.body };
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(Node {
            element,
            parent: Some(parent),
            children: SmallVec::new(),
        }));
        if let Some(node) = self.get_mut(parent) {
            node.children.push(id);
        }
        id
    }

    /// Detaches `node` and frees its entire subtree. Removing the body is a no-op.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.body || self.get(node).is_none() {
            return;
        }
        if let Some(parent) = self.parent(node) {
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.children.retain(|child| *child != node);
            }
        }
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(freed) = self.nodes[current.0 as usize].take() {
                stack.extend(freed.children);
            }
        }
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.get(node).map(|n| &n.element)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.get_mut(node).map(|n| &mut n.element)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map_or(&[], |n| n.children.as_slice())
    }

    /// Whether `node` is `ancestor` or lies inside its subtree.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors_inclusive(node).any(|id| id == ancestor)
    }

    /// Walks from `node` up to the body, starting with `node` itself.
    pub fn ancestors_inclusive(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.get(node).map(|_| node);
        std::iter::successors(start, move |id| self.parent(*id))
    }

    /// All live nodes in document order (preorder from the body).
    pub fn in_document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            if self.get(node).is_none() {
                continue;
            }
            out.push(node);
            for child in self.children(node).iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    pub fn select(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.in_document_order()
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(&pred))
            .collect()
    }

    pub fn first(&self, pred: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.in_document_order()
            .into_iter()
            .find(|id| self.element(*id).is_some_and(&pred))
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.first(|el| el.id() == Some(id))
    }

    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.first(|el| el.has_class(class))
    }

    pub fn all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.select(|el| el.has_class(class))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.remove_class(class);
        }
    }

    /// Flips the class and returns the new presence state.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.element_mut(node) {
            Some(el) => {
                if el.remove_class(class) {
                    false
                } else {
                    el.add_class(class);
                    true
                }
            }
            None => false,
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attr(name))
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::text)
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.set_text(text);
        }
    }

    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::value)
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.set_value(value);
        }
    }

    /// Vertical fraction of the element currently inside the viewport, in `0.0..=1.0`.
    ///
    /// Zero-height elements report `0.0`; they cannot meaningfully intersect.
    pub fn visible_fraction(&self, node: NodeId) -> f32 {
        let Some(el) = self.element(node) else {
            return 0.0;
        };
        let rect = el.rect();
        if rect.height <= 0.0 {
            return 0.0;
        }
        let view_top = self.viewport.scroll_y;
        let view_bottom = view_top + self.viewport.height;
        let visible = (rect.bottom().min(view_bottom) - rect.y.max(view_top)).max(0.0);
        visible / rect.height
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        // The body always exists.
        false
    }

    fn get(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0 as usize).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.0 as usize).and_then(Option::as_mut)
    }
}
