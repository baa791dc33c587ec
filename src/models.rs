// ABOUTME: Response types returned by the service clients
// ABOUTME: Pass-through JSON payload or a fixed single-key error payload

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed-shape error value substituted for the payload when a call fails
///
/// Serializes to exactly `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Failure description
    pub error: String,
}

impl ErrorPayload {
    /// Create an error payload with the given message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Outcome of a single upstream call
///
/// Serialized untagged, so callers see either the upstream JSON verbatim
/// or the error payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServiceResponse {
    /// Decoded upstream body, unmodified
    Payload(Value),
    /// Fixed error payload
    Error(ErrorPayload),
}

impl ServiceResponse {
    /// Whether the call failed
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Upstream payload, if the call succeeded
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Payload(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Convert into the plain JSON value handed to callers
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Payload(value) => value,
            Self::Error(payload) => Value::Object(
                [("error".to_owned(), Value::String(payload.error))]
                    .into_iter()
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_payload_has_single_error_key() {
        let response = ServiceResponse::Error(ErrorPayload::new("Request failed"));
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(serialized, json!({"error": "Request failed"}));
        assert_eq!(response.into_value(), json!({"error": "Request failed"}));
    }

    #[test]
    fn test_payload_passes_through_unchanged() {
        let body = json!({"flavor": "sweet", "compounds": [1, 2, 3]});
        let response = ServiceResponse::Payload(body.clone());
        assert!(!response.is_error());
        assert_eq!(response.payload(), Some(&body));
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }
}
