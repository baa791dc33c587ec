// ABOUTME: RecipeDB API client for the recipe-of-the-day endpoint
// ABOUTME: Single authenticated GET per call, returning pass-through JSON or a fixed error payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! RecipeDB API Client
//!
//! Fetches the recipe of the day. Takes no parameters; the body is returned as-is.

use super::request::{collapse, get_json, UpstreamRequest};
use crate::config::RecipeDbConfig;
use crate::constants::recipedb::{ERROR_MESSAGE, RECIPE_OF_THE_DAY_PATH, SERVICE_NAME};
use crate::errors::ServiceResult;
use crate::http_client::build_client;
use crate::models::ServiceResponse;
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

/// Recipe database API client
#[derive(Debug, Clone)]
pub struct RecipeDbClient {
    config: RecipeDbConfig,
    http_client: Client,
}

impl RecipeDbClient {
    /// Create a new client from explicit configuration
    #[must_use]
    pub fn new(config: RecipeDbConfig) -> Self {
        let http_client = build_client(config.timeout());
        Self {
            config,
            http_client,
        }
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &RecipeDbConfig {
        &self.config
    }

    /// Get the recipe of the day
    ///
    /// Failures collapse to `{"error": "Request failed"}`.
    #[instrument(skip(self), fields(service = SERVICE_NAME))]
    pub async fn get_recipe_of_the_day(&self) -> ServiceResponse {
        let result = self.fetch_recipe_of_the_day().await;
        collapse(SERVICE_NAME, result, ERROR_MESSAGE)
    }

    /// Get the recipe of the day, surfacing the failure category
    ///
    /// # Errors
    ///
    /// Returns a transport `ServiceError` if the request fails for any reason
    pub async fn fetch_recipe_of_the_day(&self) -> ServiceResult<Value> {
        let request = UpstreamRequest {
            service: SERVICE_NAME,
            base_url: &self.config.base_url,
            path: RECIPE_OF_THE_DAY_PATH,
            api_key: &self.config.api_key,
            query: &[],
            timeout: self.config.timeout(),
        };

        get_json(&self.http_client, &request).await
    }
}
