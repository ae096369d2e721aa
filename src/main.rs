//! addon-config CLI entry point.

use anyhow::Result;
use clap::Parser;

use addon_config::cli::commands::{addons, resolve};
use addon_config::cli::{handle_error, Cli, Commands};
use addon_config::infrastructure::config::SettingsLoader;
use addon_config::infrastructure::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        handle_error(&err, cli.json);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = SettingsLoader::load(cli.settings.as_deref())?;
    cli.apply_overrides(&mut settings);
    logging::init(&settings.logging)?;

    match &cli.command {
        Commands::Resolve(args) => resolve::execute(args, &settings, cli.json),
        Commands::Addons(args) => addons::execute(args, &settings, cli.json),
    }
}
