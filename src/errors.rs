// ABOUTME: Categorized error type for upstream service calls and configuration loading
// ABOUTME: Maps reqwest failures onto timeout, connection, status, and decode variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Service Error Handling
//!
//! Every failure of an upstream call is a transport failure. The `fetch_*`
//! operations on the clients surface the category below; the default
//! `get_*` operations collapse all of them into a fixed error payload.

use thiserror::Error;

/// Result alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised while talking to an upstream API or loading its configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// Request did not complete before the deadline
    #[error("{service} request timed out")]
    Timeout {
        /// Upstream service label
        service: String,
    },

    /// Connection to the upstream host could not be established
    #[error("{service} connection failed: {message}")]
    Connection {
        /// Upstream service label
        service: String,
        /// Transport error detail
        message: String,
    },

    /// Upstream answered with a non-2xx status
    #[error("{service} returned HTTP {status_code}: {message}")]
    HttpStatus {
        /// Upstream service label
        service: String,
        /// HTTP status code
        status_code: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body was not valid JSON
    #[error("{service} returned an undecodable body: {message}")]
    InvalidResponse {
        /// Upstream service label
        service: String,
        /// Decode error detail
        message: String,
    },

    /// Endpoint URL could not be built from the configured base URL
    #[error("{service} endpoint URL is invalid: {message}")]
    InvalidUrl {
        /// Upstream service label
        service: String,
        /// Parse error detail
        message: String,
    },

    /// Any other request failure (client construction, redirect loop, body read)
    #[error("{service} request failed: {message}")]
    Request {
        /// Upstream service label
        service: String,
        /// Error detail
        message: String,
    },

    /// Required configuration value is missing
    #[error("configuration error for {key}: {reason}")]
    Configuration {
        /// Configuration key (usually an environment variable name)
        key: String,
        /// Why the value could not be used
        reason: String,
    },
}

impl ServiceError {
    /// Categorize a `reqwest` failure for the given service
    #[must_use]
    pub fn from_reqwest(service: &str, error: &reqwest::Error) -> Self {
        let service = service.to_owned();

        // Timeout is checked first: a connect timeout also reports `is_connect`
        if error.is_timeout() {
            return Self::Timeout { service };
        }

        if error.is_connect() {
            return Self::Connection {
                service,
                message: error.to_string(),
            };
        }

        if let Some(status) = error.status() {
            return Self::HttpStatus {
                service,
                status_code: status.as_u16(),
                message: error.to_string(),
            };
        }

        if error.is_decode() {
            return Self::InvalidResponse {
                service,
                message: error.to_string(),
            };
        }

        Self::Request {
            service,
            message: error.to_string(),
        }
    }

    /// Create an HTTP status error
    #[must_use]
    pub fn http_status(service: &str, status_code: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            service: service.to_owned(),
            status_code,
            message: message.into(),
        }
    }

    /// Create an invalid URL error
    #[must_use]
    pub fn invalid_url(service: &str, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            service: service.to_owned(),
            message: message.into(),
        }
    }

    /// Create a configuration error for an environment variable that is not set
    #[must_use]
    pub fn missing_env(key: &str) -> Self {
        Self::Configuration {
            key: key.to_owned(),
            reason: "environment variable is not set".to_owned(),
        }
    }

    /// Whether this error came from an upstream exchange rather than local setup
    #[must_use]
    pub const fn is_transport_failure(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }

    /// HTTP status code, when the upstream answered
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
