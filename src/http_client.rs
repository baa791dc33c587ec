// ABOUTME: HTTP client construction for upstream service calls
// ABOUTME: Builds reqwest clients with the configured deadline and crate user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::http::USER_AGENT;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Build an HTTP client whose requests are bounded by `timeout`
///
/// Falls back to a default client if the builder fails; callers also set the
/// deadline on each request, so the fallback still honors `timeout`.
#[must_use]
pub fn build_client(timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build configured HTTP client, using defaults");
            Client::new()
        })
}
