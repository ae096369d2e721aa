//! Command-line interface for addon-config

pub mod commands;
pub mod models;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::Settings;
use commands::{AddonsArgs, ResolveArgs};

#[derive(Parser, Debug)]
#[command(
    name = "addon-config",
    version,
    about = "Resolve cloud add-on environment variables into application configuration"
)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (defaults to ./addon-config.yaml when present)
    #[arg(long, global = true, value_name = "FILE", env = "ADDON_CONFIG_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Read the Postmark relay host from POSTMARK_SMTP_SERVER instead of writing its name
    #[arg(long, global = true)]
    pub postmark_server_from_env: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the current environment and print the resulting configuration
    Resolve(ResolveArgs),
    /// Show which add-ons are attached, without printing values
    Addons(AddonsArgs),
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if self.postmark_server_from_env {
            settings.resolver.postmark_server_from_env = true;
        }
    }
}

/// Report a command failure and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
