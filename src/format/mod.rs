// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! User-facing formatting, Spanish (es-ES) conventions.
//!
//! Numbers group thousands with `.` and separate decimals with `,`; dates come in the
//! three named presets the rest of the app relies on (`short`, `long`, `time`).

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};

// es-ES does not group four-digit integers; grouping starts at five digits.
const MIN_GROUPING_DIGITS: usize = 5;

const SHORT_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const LONG_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Fixed-decimal formatting with es-ES grouping.
///
/// Non-finite input falls through to the host float rendering, matching the
/// original's coercion behavior of having no error path here.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let rounded_to_zero = fixed.bytes().all(|b| !b.is_ascii_digit() || b == b'0');
    if value.is_sign_negative() && !rounded_to_zero {
        out.push('-');
    }

    let digits = int_part.as_bytes();
    let grouped = digits.len() >= MIN_GROUPING_DIGITS;
    for (i, digit) in digits.iter().enumerate() {
        if grouped && i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(char::from(*digit));
    }
    if let Some(frac_part) = frac_part {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Short,
    Long,
    Time,
}

impl FromStr for DatePreset {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            "time" => Ok(Self::Time),
            other => Err(FormatError::UnsupportedPreset(other.to_owned())),
        }
    }
}

/// Formats a date with one of the named presets.
///
/// Unknown presets are an error rather than a silent default; callers pass
/// preset names through from page markup and a typo should surface.
pub fn format_date(value: NaiveDateTime, preset: &str) -> Result<String, FormatError> {
    let preset = preset.parse::<DatePreset>()?;
    let month = value.month0() as usize;
    Ok(match preset {
        DatePreset::Short => format!("{} {} {}", value.day(), SHORT_MONTHS[month], value.year()),
        DatePreset::Long => {
            format!("{} de {} de {}", value.day(), LONG_MONTHS[month], value.year())
        }
        DatePreset::Time => format!("{:02}:{:02}", value.hour(), value.minute()),
    })
}

/// Parses the leading decimal number of a string, `parseFloat`-style.
///
/// Used to read the currently displayed value off a stat card before
/// animating toward a new target.
pub fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let mut seen_dot = false;
    while let Some(b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnsupportedPreset(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPreset(preset) => write!(f, "unsupported date preset {preset:?}"),
        }
    }
}

impl Error for FormatError {}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("date")
            .and_hms_opt(h, min, 0)
            .expect("time")
    }

    #[rstest]
    #[case(0.0, 2, "0,00")]
    #[case(1234.5, 2, "1234,50")]
    #[case(12345.0, 2, "12.345,00")]
    #[case(1_234_567.891, 2, "1.234.567,89")]
    #[case(-9876.5, 1, "-9876,5")]
    #[case(42.0, 0, "42")]
    #[case(1_000_000.0, 0, "1.000.000")]
    fn number_formatting_follows_es_es_grouping(
        #[case] value: f64,
        #[case] decimals: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(format_number(value, decimals), expected);
    }

    #[test]
    fn negative_values_rounding_to_zero_drop_the_sign() {
        assert_eq!(format_number(-0.0004, 2), "0,00");
    }

    #[test]
    fn short_preset_uses_abbreviated_month() {
        assert_eq!(format_date(date(2026, 8, 7, 0, 0), "short").expect("short"), "7 ago 2026");
    }

    #[test]
    fn long_preset_spells_out_the_month() {
        assert_eq!(
            format_date(date(2026, 9, 21, 0, 0), "long").expect("long"),
            "21 de septiembre de 2026"
        );
    }

    #[test]
    fn time_preset_is_two_digit() {
        assert_eq!(format_date(date(2026, 1, 1, 9, 5), "time").expect("time"), "09:05");
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = format_date(date(2026, 1, 1, 0, 0), "full").unwrap_err();
        assert_eq!(err, FormatError::UnsupportedPreset("full".to_owned()));
    }

    #[rstest]
    #[case("12.5", Some(12.5))]
    #[case("  -3 estudiantes", Some(-3.0))]
    #[case("1.2.3", Some(1.2))]
    #[case("n/a", None)]
    #[case("", None)]
    fn leading_number_matches_parse_float(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(leading_number(text), expected);
    }
}
