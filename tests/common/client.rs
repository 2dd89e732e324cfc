//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for the server's endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Calendar Endpoints
    // ========================================================================

    /// GET /v1/calendar/events with both window parameters.
    pub async fn get_events(&self, start: &str, end: &str) -> Response {
        self.client
            .get(format!("{}/v1/calendar/events", self.base_url))
            .query(&[("start", start), ("end", end)])
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/calendar/events with a raw query string (for missing/empty
    /// parameter cases).
    pub async fn get_events_raw(&self, query_string: &str) -> Response {
        let url = if query_string.is_empty() {
            format!("{}/v1/calendar/events", self.base_url)
        } else {
            format!("{}/v1/calendar/events?{}", self.base_url, query_string)
        };
        self.client.get(url).send().await.expect("Request failed")
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    /// GET / (server stats)
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }
}
