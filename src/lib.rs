// ABOUTME: Main library entry point for the FlavorDB and RecipeDB service clients
// ABOUTME: Exposes configuration, clients, response types, errors, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Culinary Data Clients
//!
//! Two independent wrappers around third-party culinary APIs:
//!
//! - [`FlavorDbClient`] looks up an ingredient's flavor profile
//! - [`RecipeDbClient`] fetches the recipe of the day
//!
//! Each call is one bearer-authenticated GET with a fixed deadline. The
//! upstream JSON is returned unmodified; any failure is replaced by a fixed
//! `{"error": ...}` payload. The `fetch_*` variants return a categorized
//! [`ServiceError`] instead.
//!
//! ```rust,no_run
//! use culinary_data_clients::{RecipeDbClient, RecipeDbConfig};
//!
//! # async fn example() {
//! let client = RecipeDbClient::new(RecipeDbConfig::new("your_api_key"));
//! let recipe = client.get_recipe_of_the_day().await;
//! if recipe.is_error() {
//!     eprintln!("recipe lookup failed");
//! }
//! # }
//! ```

/// Per-service API configuration
pub mod config;

/// Endpoint paths, defaults, and fixed error messages
pub mod constants;

/// Categorized service errors
pub mod errors;

/// Upstream API clients
pub mod external;

/// HTTP client construction
pub mod http_client;

/// Console logging setup
pub mod logging;

/// Response payload types
pub mod models;

pub use config::{FlavorDbConfig, RecipeDbConfig, ServicesConfig};
pub use errors::{ServiceError, ServiceResult};
pub use external::{FlavorDbClient, RecipeDbClient};
pub use models::{ErrorPayload, ServiceResponse};
