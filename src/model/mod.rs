// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Page model: document tree, viewport, and input events.

mod dom;
mod events;
mod viewport;

pub use dom::{Document, Element, NodeId, Rect};
pub use events::{Key, PageEvent};
pub use viewport::{Breakpoint, Viewport, MOBILE_BREAKPOINT_PX, TABLET_BREAKPOINT_PX};
