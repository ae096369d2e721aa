//! Implementation of the `addon-config resolve` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::adapters::MemoryConfigStore;
use crate::cli::models::{ConfigEntry, ValueSource};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{DocumentStoreSelection, EnvironmentSnapshot, Settings};
use crate::infrastructure::logging::SecretScrubber;
use crate::services::{ConfigResolver, ResolutionSummary};

#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// YAML mapping of configuration the application already sets
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Print secret values instead of masking them
    #[arg(long)]
    pub show_secrets: bool,

    /// Only list keys assigned by resolution
    #[arg(long)]
    pub resolved_only: bool,
}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub entries: Vec<ConfigEntry>,
    pub summary: ResolutionSummary,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![TableFormatter::new().format_config(&self.entries)];

        if let DocumentStoreSelection::Ambiguous(vars) = &self.summary.document_store {
            lines.push(format!(
                "\nMongoDB not configured: several add-ons are enabled ({})",
                vars.join(", ")
            ));
        }
        lines.push(format!(
            "\n{} key(s) assigned from the environment",
            self.summary.assigned.len()
        ));

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        let config: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.key.clone(),
                    serde_json::to_value(&entry.value).unwrap_or_default(),
                )
            })
            .collect();

        serde_json::json!({
            "config": config,
            "resolved": self.summary.assigned,
            "summary": self.summary,
        })
    }
}

/// Resolve `env` on top of the optional defaults file.
pub fn build(
    args: &ResolveArgs,
    resolver: &ConfigResolver,
    env: &EnvironmentSnapshot,
) -> Result<ResolveOutput> {
    let mut store = match &args.defaults {
        Some(path) => MemoryConfigStore::from_yaml_file(path).with_context(|| {
            format!("Failed to load application defaults from {}", path.display())
        })?,
        None => MemoryConfigStore::new(),
    };

    let summary = resolver.resolve(env, &mut store);
    let scrubber = SecretScrubber::new();

    let entries = store
        .iter()
        .map(|(key, value)| {
            let source = if summary.assigned.iter().any(|assigned| *assigned == key) {
                ValueSource::Resolved
            } else {
                ValueSource::Application
            };
            let value = if args.show_secrets {
                value.clone()
            } else {
                scrubber.scrub_value(key, value)
            };
            ConfigEntry {
                key: key.to_string(),
                value,
                source,
            }
        })
        .filter(|entry| !args.resolved_only || entry.source == ValueSource::Resolved)
        .collect();

    Ok(ResolveOutput { entries, summary })
}

pub fn execute(args: &ResolveArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let resolver = ConfigResolver::new(settings.resolver.clone());
    let env = EnvironmentSnapshot::from_process();

    let result = build(args, &resolver, &env)?;
    output(&result, json_mode);
    Ok(())
}
