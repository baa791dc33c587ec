// ABOUTME: External API configuration for the FlavorDB and RecipeDB clients
// ABOUTME: API keys, base URLs, and request deadlines loaded explicitly or from environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{env_vars, flavordb, http, recipedb};
use crate::errors::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

/// Configuration for both upstream services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Flavor database API configuration
    pub flavordb: FlavorDbConfig,
    /// Recipe database API configuration
    pub recipedb: RecipeDbConfig,
}

impl ServicesConfig {
    /// Load both service configurations from environment
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Configuration` if either API key variable is not set
    pub fn from_env() -> ServiceResult<Self> {
        Ok(Self {
            flavordb: FlavorDbConfig::from_env()?,
            recipedb: RecipeDbConfig::from_env()?,
        })
    }
}

/// Flavor database API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct FlavorDbConfig {
    /// Bearer token sent in the `Authorization` header
    #[serde(skip_serializing)]
    pub api_key: String,
    /// API base URL, without the `/ingredient` path
    pub base_url: String,
    /// Request deadline in seconds
    pub timeout_secs: u64,
}

impl FlavorDbConfig {
    /// Create a configuration with the default endpoint and deadline
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: flavordb::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load flavor database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Configuration` if `FLAVORDB_API_KEY` is not set
    pub fn from_env() -> ServiceResult<Self> {
        Ok(Self {
            api_key: required_env(env_vars::FLAVORDB_API_KEY)?,
            base_url: env_var_or(env_vars::FLAVORDB_BASE_URL, flavordb::DEFAULT_BASE_URL),
            timeout_secs: timeout_secs_from_env(),
        })
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request deadline
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request deadline
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for FlavorDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlavorDbConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Recipe database API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct RecipeDbConfig {
    /// Bearer token sent in the `Authorization` header
    #[serde(skip_serializing)]
    pub api_key: String,
    /// API base URL, without the `/recipe/recipeofday` path
    pub base_url: String,
    /// Request deadline in seconds
    pub timeout_secs: u64,
}

impl RecipeDbConfig {
    /// Create a configuration with the default endpoint and deadline
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: recipedb::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load recipe database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Configuration` if `API_KEY` is not set
    pub fn from_env() -> ServiceResult<Self> {
        Ok(Self {
            api_key: required_env(env_vars::RECIPEDB_API_KEY)?,
            base_url: env_var_or(env_vars::RECIPEDB_BASE_URL, recipedb::DEFAULT_BASE_URL),
            timeout_secs: timeout_secs_from_env(),
        })
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request deadline
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request deadline
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for RecipeDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeDbConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn required_env(key: &str) -> ServiceResult<String> {
    env::var(key).map_err(|_| ServiceError::missing_env(key))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn timeout_secs_from_env() -> u64 {
    env::var(env_vars::SERVICE_TIMEOUT_SECS)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(http::DEFAULT_TIMEOUT_SECS)
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}
