// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Backend API boundary.
//!
//! The controller only sees [`ApiClient`]; the blocking HTTP implementation lives in
//! [`http`]. Tests and the demo shell substitute scripted clients. Per the error
//! taxonomy, every failure here is "feature temporarily unavailable": callers log and
//! move on, nothing is surfaced to the user.

pub mod http;

use std::error::Error;
use std::fmt;

use serde::Deserialize;

pub use http::HttpApi;

/// Realtime statistics payload.
///
/// `metrics` is positionally matched to the stat cards in document order;
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub metrics: Vec<f64>,
}

/// Search results are passed through undecoded; their shape belongs to the
/// collaborator that renders them.
pub type SearchRecord = serde_json::Value;

pub trait ApiClient {
    fn realtime_stats(&self) -> Result<StatsSnapshot, ApiError>;
    fn search(&self, query: &str) -> Result<Vec<SearchRecord>, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Status(u16),
    /// The request never completed (connect, timeout, TLS).
    Transport(String),
    /// The body was not the JSON shape we expect.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "unexpected HTTP status {code}"),
            Self::Transport(detail) => write!(f, "transport failure: {detail}"),
            Self::Decode(detail) => write!(f, "malformed response body: {detail}"),
        }
    }
}

impl Error for ApiError {}
