// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shell palette.

use ratatui::style::Color;

pub(crate) const ACTIVE_NAV_COLOR: Color = Color::LightGreen;
pub(crate) const HOVER_COLOR: Color = Color::LightBlue;
pub(crate) const STAT_VALUE_COLOR: Color = Color::LightCyan;
pub(crate) const ERROR_COLOR: Color = Color::LightRed;
pub(crate) const TOOLTIP_COLOR: Color = Color::LightYellow;
pub(crate) const FOOTER_LABEL_COLOR: Color = Color::Gray;
pub(crate) const FOOTER_KEY_COLOR: Color = Color::Cyan;
pub(crate) const BRAND_COLOR: Color = Color::White;

/// Toast accent per notification severity class; unknown severities stay neutral.
pub(crate) fn severity_color(severity_class: Option<&str>) -> Color {
    match severity_class {
        Some("notification-success") => Color::LightGreen,
        Some("notification-warning") => Color::LightYellow,
        Some("notification-danger") => Color::LightRed,
        Some("notification-info") => Color::LightBlue,
        _ => Color::Gray,
    }
}
