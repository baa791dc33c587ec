// ABOUTME: External API client modules (FlavorDB, RecipeDB)
// ABOUTME: Independent bearer-authenticated clients sharing one request executor

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients
//!
//! The two clients do not depend on each other and hold no state between calls.

pub mod flavordb_client;
pub mod recipedb_client;
pub mod request;

// Re-export commonly used types
pub use flavordb_client::FlavorDbClient;
pub use recipedb_client::RecipeDbClient;
