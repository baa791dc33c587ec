// ABOUTME: Constants for the FlavorDB and RecipeDB clients grouped by domain
// ABOUTME: Endpoint paths, default base URLs, environment variable names, and fixed error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values are grouped by the service or concern they belong to.

/// Service names used for structured logging
pub mod service_names {
    /// Name reported by the logging subsystem
    pub const CULINARY_DATA_CLIENTS: &str = "culinary-data-clients";
    /// Crate target used for log filtering
    pub const CRATE_TARGET: &str = "culinary_data_clients";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Bearer token for the flavor database API
    pub const FLAVORDB_API_KEY: &str = "FLAVORDB_API_KEY";
    /// Optional base URL override for the flavor database API
    pub const FLAVORDB_BASE_URL: &str = "FLAVORDB_BASE_URL";
    /// Bearer token for the recipe database API
    pub const RECIPEDB_API_KEY: &str = "API_KEY";
    /// Optional base URL override for the recipe database API
    pub const RECIPEDB_BASE_URL: &str = "RECIPEDB_BASE_URL";
    /// Optional request timeout override, in seconds, shared by both clients
    pub const SERVICE_TIMEOUT_SECS: &str = "SERVICE_TIMEOUT_SECS";
}

/// HTTP transport defaults
pub mod http {
    /// Request deadline applied to every upstream call
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
    /// User agent sent with every upstream call
    pub const USER_AGENT: &str = concat!("culinary-data-clients/", env!("CARGO_PKG_VERSION"));
    /// Content type announced on every upstream call
    pub const JSON_CONTENT_TYPE: &str = "application/json";
}

/// Flavor database API
pub mod flavordb {
    /// Service label used in errors and logs
    pub const SERVICE_NAME: &str = "FlavorDB";
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.flavordb.com";
    /// Ingredient lookup path, relative to the base URL
    pub const INGREDIENT_PATH: &str = "ingredient";
    /// Query parameter carrying the ingredient name
    pub const NAME_QUERY_PARAM: &str = "name";
    /// Error message returned in place of the payload on any failure
    pub const ERROR_MESSAGE: &str = "FlavorDB request failed";
}

/// Recipe database API
pub mod recipedb {
    /// Service label used in errors and logs
    pub const SERVICE_NAME: &str = "RecipeDB";
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "http://cosylab.iiitd.edu/recipe2-api";
    /// Recipe-of-the-day path, relative to the base URL
    pub const RECIPE_OF_THE_DAY_PATH: &str = "recipe/recipeofday";
    /// Error message returned in place of the payload on any failure
    pub const ERROR_MESSAGE: &str = "Request failed";
}
