// ABOUTME: Configuration module for the upstream service clients
// ABOUTME: Re-exports per-service API configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! API keys are passed to each client at construction. `from_env()` is one
//! way to obtain them; tests and embedding applications build configs directly.

/// External API configuration (keys, base URLs, deadlines)
pub mod api_providers;

pub use api_providers::{FlavorDbConfig, RecipeDbConfig, ServicesConfig};
