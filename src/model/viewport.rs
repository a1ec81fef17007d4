// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewport state and the responsive breakpoints.

/// Mobile layout applies at widths up to and including this.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
/// Tablet layout applies above mobile, up to and including this.
pub const TABLET_BREAKPOINT_PX: f32 = 1024.0;

/// Scrollable viewport over the document, in CSS pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }
}

/// Viewport class derived from the width. Each class owns its own sidebar
/// style state; crossing a breakpoint must not leave the old class's state
/// behind (see the resize reset in the controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn of(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else if width <= TABLET_BREAKPOINT_PX {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}
