// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Blocking HTTP implementation of [`ApiClient`].

use std::time::Duration;

use super::{ApiClient, ApiError, SearchRecord, StatsSnapshot};

const STATS_PATH: &str = "/api/estadisticas/tiempo-real/";
const SEARCH_PATH: &str = "/api/buscar/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpApi {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpApi {
    /// `base` is the server origin, e.g. `http://localhost:8000`; a trailing
    /// slash is tolerated.
    pub fn new(base: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Ok(Self { base, client })
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base, path))
            .query(query)
            .send()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response.json().map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl ApiClient for HttpApi {
    fn realtime_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_json(STATS_PATH, &[])
    }

    fn search(&self, query: &str) -> Result<Vec<SearchRecord>, ApiError> {
        self.get_json(SEARCH_PATH, &[("q", query)])
    }
}

#[cfg(test)]
mod tests {
    use super::HttpApi;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpApi::new("http://localhost:8000/").expect("client");
        assert_eq!(api.base, "http://localhost:8000");
    }
}
