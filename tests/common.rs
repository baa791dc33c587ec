// ABOUTME: Shared test utilities for the service client integration tests
// ABOUTME: Provides mock-server backed configs and an address that refuses connections
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `culinary_data_clients`

use culinary_data_clients::{FlavorDbConfig, RecipeDbConfig};
use std::net::TcpListener;
use wiremock::MockServer;

/// Bearer token used by every test config
pub const TEST_API_KEY: &str = "test-api-key-123";

/// Expected `Authorization` header value for [`TEST_API_KEY`]
pub const TEST_BEARER: &str = "Bearer test-api-key-123";

/// Path prefix the recipe API lives under, mirroring the production host layout
pub const RECIPE_BASE_PATH: &str = "/recipe2-api";

/// Flavor client config pointed at the mock server
pub fn flavordb_config(server: &MockServer) -> FlavorDbConfig {
    FlavorDbConfig::new(TEST_API_KEY).with_base_url(server.uri())
}

/// Recipe client config pointed at the mock server, under `/recipe2-api`
pub fn recipedb_config(server: &MockServer) -> RecipeDbConfig {
    RecipeDbConfig::new(TEST_API_KEY).with_base_url(format!("{}{RECIPE_BASE_PATH}", server.uri()))
}

/// Base URL of a local port with nothing listening on it
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
