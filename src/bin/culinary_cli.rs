// ABOUTME: Culinary CLI - command-line access to the FlavorDB and RecipeDB clients
// ABOUTME: Prints the upstream JSON, or the fixed error payload, to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Flavor profile of an ingredient (requires FLAVORDB_API_KEY)
//! culinary-cli flavor basil
//!
//! # Recipe of the day (requires API_KEY)
//! culinary-cli recipe-of-the-day
//!
//! # Point at a different host with a shorter deadline
//! culinary-cli --base-url http://localhost:8080 --timeout-secs 2 flavor "black pepper"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use culinary_data_clients::logging::LoggingConfig;
use culinary_data_clients::{
    FlavorDbClient, FlavorDbConfig, RecipeDbClient, RecipeDbConfig, ServiceResponse,
};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "culinary-cli",
    about = "FlavorDB and RecipeDB lookups",
    long_about = "Issues a single authenticated request to the flavor or recipe database and prints the JSON response."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL override for the selected service
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request deadline override, in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Look up the flavor profile of an ingredient
    Flavor {
        /// Ingredient name, sent as the `name` query parameter
        ingredient: String,
    },
    /// Fetch the recipe of the day
    RecipeOfTheDay,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let response = match &cli.command {
        Command::Flavor { ingredient } => flavor(&cli, ingredient).await?,
        Command::RecipeOfTheDay => recipe_of_the_day(&cli).await?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_error() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn flavor(cli: &Cli, ingredient: &str) -> Result<ServiceResponse> {
    let mut config = FlavorDbConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config = config.with_timeout_secs(timeout_secs);
    }

    info!(base_url = %config.base_url, ingredient, "Requesting flavor profile");
    let client = FlavorDbClient::new(config);
    Ok(client.get_ingredient_flavor_profile(ingredient).await)
}

async fn recipe_of_the_day(cli: &Cli) -> Result<ServiceResponse> {
    let mut config = RecipeDbConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config = config.with_timeout_secs(timeout_secs);
    }

    info!(base_url = %config.base_url, "Requesting recipe of the day");
    let client = RecipeDbClient::new(config);
    Ok(client.get_recipe_of_the_day().await)
}
