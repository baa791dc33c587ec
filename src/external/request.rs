// ABOUTME: Authenticated GET executor shared by the upstream API clients
// ABOUTME: Builds endpoint URLs, attaches bearer and JSON headers, and categorizes failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shared request executor
//!
//! Every upstream call is one GET with a bearer token, a JSON content type,
//! and a deadline. Failures are categorized here and collapsed by [`collapse`].

use crate::constants::http::JSON_CONTENT_TYPE;
use crate::errors::{ServiceError, ServiceResult};
use crate::models::{ErrorPayload, ServiceResponse};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// A single authenticated GET against an upstream API
#[derive(Debug, Clone, Copy)]
pub struct UpstreamRequest<'a> {
    /// Service label used in errors and logs
    pub service: &'a str,
    /// API base URL
    pub base_url: &'a str,
    /// Path relative to the base URL
    pub path: &'a str,
    /// Bearer token
    pub api_key: &'a str,
    /// Query parameters
    pub query: &'a [(&'a str, &'a str)],
    /// Request deadline
    pub timeout: Duration,
}

/// Join a base URL and a relative path, keeping any path prefix on the base
///
/// # Errors
///
/// Returns `ServiceError::InvalidUrl` if the joined string is not an absolute URL
pub fn endpoint_url(service: &str, base_url: &str, path: &str) -> ServiceResult<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ServiceError::invalid_url(service, format!("{joined}: {e}")))
}

/// Issue the request and decode the body as JSON without inspecting it
///
/// # Errors
///
/// Returns a transport `ServiceError` on timeout, connection failure,
/// non-2xx status, or a body that is not JSON
pub async fn get_json(client: &Client, request: &UpstreamRequest<'_>) -> ServiceResult<Value> {
    let url = endpoint_url(request.service, request.base_url, request.path)?;
    debug!(service = request.service, url = %url, "Sending upstream request");

    let mut builder = client
        .get(url)
        .header(AUTHORIZATION, format!("Bearer {}", request.api_key))
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .timeout(request.timeout);
    if !request.query.is_empty() {
        builder = builder.query(request.query);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ServiceError::from_reqwest(request.service, &e))?;

    let status = response.status();
    debug!(
        service = request.service,
        status = status.as_u16(),
        "Upstream response received"
    );

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ServiceError::http_status(
            request.service,
            status.as_u16(),
            text,
        ));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ServiceError::from_reqwest(request.service, &e))
}

/// Collapse a categorized result into the caller-facing response, logging any failure
pub fn collapse(
    service: &str,
    result: ServiceResult<Value>,
    error_message: &str,
) -> ServiceResponse {
    match result {
        Ok(body) => ServiceResponse::Payload(body),
        Err(e) => {
            warn!(service, error = %e, "{error_message}");
            ServiceResponse::Error(ErrorPayload::new(error_message))
        }
    }
}
