//! Implementation of the `addon-config addons` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::adapters::MemoryConfigStore;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{
    Broker, DocumentStoreSelection, EnvironmentSnapshot, MailProvider, Settings, CORE_PASSTHROUGHS,
    OBJECT_CACHE_PASSTHROUGHS,
};
use crate::services::ConfigResolver;

#[derive(Args, Debug, Default)]
pub struct AddonsArgs {}

#[derive(Debug, Serialize)]
pub struct AddonsOutput {
    pub broker: Option<Broker>,
    pub mail: Option<MailProvider>,
    pub cache_sources: Vec<&'static str>,
    pub document_store: DocumentStoreSelection,
    pub cloudant: bool,
    /// Passthrough variables present in the environment
    pub passthroughs: Vec<&'static str>,
}

impl CommandOutput for AddonsOutput {
    fn to_human(&self) -> String {
        let none = || "-".to_string();
        let rows = vec![
            ("Message broker", self.broker.map_or_else(none, |b| b.to_string())),
            ("Mail", self.mail.map_or_else(none, |m| m.to_string())),
            (
                "Redis",
                if self.cache_sources.is_empty() {
                    none()
                } else {
                    self.cache_sources.join(", ")
                },
            ),
            ("MongoDB", self.document_store.to_string()),
            ("Cloudant", if self.cloudant { "CLOUDANT_URL".to_string() } else { none() }),
            (
                "Passthrough",
                if self.passthroughs.is_empty() {
                    none()
                } else {
                    self.passthroughs.join(", ")
                },
            ),
        ];

        TableFormatter::new().format_addons(&rows)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Detect add-ons in `env` without printing any configuration values.
pub fn build(resolver: &ConfigResolver, env: &EnvironmentSnapshot) -> AddonsOutput {
    let mut scratch = MemoryConfigStore::new();
    let summary = resolver.resolve(env, &mut scratch);

    let passthroughs = CORE_PASSTHROUGHS
        .iter()
        .chain(OBJECT_CACHE_PASSTHROUGHS)
        .map(|p| p.source)
        .filter(|source| env.contains(source))
        .collect();

    AddonsOutput {
        broker: summary.broker,
        mail: summary.mail,
        cache_sources: summary.cache_sources,
        document_store: summary.document_store,
        cloudant: summary.cloudant,
        passthroughs,
    }
}

pub fn execute(_args: &AddonsArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let resolver = ConfigResolver::new(settings.resolver.clone());
    let result = build(&resolver, &EnvironmentSnapshot::from_process());
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_addons() {
        let env: EnvironmentSnapshot = [
            ("RABBITMQ_URL", "amqp://rabbit"),
            ("SENDGRID_USERNAME", "sg"),
            ("REDISTOGO_URL", "redis://legacy:9000"),
            ("MONGOHQ_URL", "mongodb://hq/app"),
            ("DATABASE_URL", "postgres://db/app"),
            ("MEMCACHIER_SERVERS", "mc:11211"),
        ]
        .into_iter()
        .collect();

        let result = build(&ConfigResolver::default(), &env);

        assert_eq!(result.broker, Some(Broker::RabbitMq));
        assert_eq!(result.mail, Some(MailProvider::SendGrid));
        assert_eq!(result.cache_sources, vec!["REDISTOGO_URL"]);
        assert_eq!(result.document_store, DocumentStoreSelection::Single("MONGOHQ_URL"));
        assert!(!result.cloudant);
        assert_eq!(result.passthroughs, vec!["DATABASE_URL", "MEMCACHIER_SERVERS"]);
    }

    #[test]
    fn test_json_reports_ambiguity() {
        let env: EnvironmentSnapshot =
            [("MONGOLAB_URI", "mongodb://a"), ("MONGOHQ_URL", "mongodb://b")]
                .into_iter()
                .collect();

        let json = build(&ConfigResolver::default(), &env).to_json();

        assert_eq!(json["document_store"]["status"], "ambiguous");
        assert_eq!(json["document_store"]["variables"][0], "MONGOLAB_URI");
        assert_eq!(json["document_store"]["variables"][1], "MONGOHQ_URL");
        assert!(json["broker"].is_null());
    }

    #[test]
    fn test_human_output_lists_everything() {
        let rendered = build(&ConfigResolver::default(), &EnvironmentSnapshot::new()).to_human();

        for label in ["Message broker", "Mail", "Redis", "MongoDB", "Cloudant", "Passthrough"] {
            assert!(rendered.contains(label), "{label} row missing");
        }
    }
}
