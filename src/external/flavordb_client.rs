// ABOUTME: FlavorDB API client for ingredient flavor profile lookups
// ABOUTME: Single authenticated GET per call, returning pass-through JSON or a fixed error payload

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! FlavorDB API Client
//!
//! Looks up the flavor profile of an ingredient by name. The upstream body is
//! returned as-is; it is neither validated nor cached.
//!
//! # Example
//! ```rust,no_run
//! use culinary_data_clients::config::FlavorDbConfig;
//! use culinary_data_clients::external::FlavorDbClient;
//!
//! # async fn example() {
//! let client = FlavorDbClient::new(FlavorDbConfig::new("your_api_key"));
//! let profile = client.get_ingredient_flavor_profile("basil").await;
//! println!("{}", profile.into_value());
//! # }
//! ```

use super::request::{collapse, get_json, UpstreamRequest};
use crate::config::FlavorDbConfig;
use crate::constants::flavordb::{
    ERROR_MESSAGE, INGREDIENT_PATH, NAME_QUERY_PARAM, SERVICE_NAME,
};
use crate::errors::ServiceResult;
use crate::http_client::build_client;
use crate::models::ServiceResponse;
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

/// Flavor database API client
#[derive(Debug, Clone)]
pub struct FlavorDbClient {
    config: FlavorDbConfig,
    http_client: Client,
}

impl FlavorDbClient {
    /// Create a new client from explicit configuration
    #[must_use]
    pub fn new(config: FlavorDbConfig) -> Self {
        let http_client = build_client(config.timeout());
        Self {
            config,
            http_client,
        }
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &FlavorDbConfig {
        &self.config
    }

    /// Get the flavor profile of an ingredient
    ///
    /// Any failure (timeout, connection error, non-2xx status, non-JSON body)
    /// is logged and replaced by `{"error": "FlavorDB request failed"}`.
    #[instrument(skip(self), fields(service = SERVICE_NAME))]
    pub async fn get_ingredient_flavor_profile(&self, ingredient_name: &str) -> ServiceResponse {
        let result = self.fetch_ingredient_flavor_profile(ingredient_name).await;
        collapse(SERVICE_NAME, result, ERROR_MESSAGE)
    }

    /// Get the flavor profile of an ingredient, surfacing the failure category
    ///
    /// # Errors
    ///
    /// Returns a transport `ServiceError` if the request fails for any reason
    pub async fn fetch_ingredient_flavor_profile(
        &self,
        ingredient_name: &str,
    ) -> ServiceResult<Value> {
        let query = [(NAME_QUERY_PARAM, ingredient_name)];
        let request = UpstreamRequest {
            service: SERVICE_NAME,
            base_url: &self.config.base_url,
            path: INGREDIENT_PATH,
            api_key: &self.config.api_key,
            query: &query,
            timeout: self.config.timeout(),
        };

        get_json(&self.http_client, &request).await
    }
}
