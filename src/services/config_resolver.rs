//! Add-on configuration resolution.
//!
//! A single pass over an [`EnvironmentSnapshot`] that writes derived keys into
//! a [`ConfigStore`] with set-if-absent semantics. Rule groups run in a fixed
//! order:
//!
//! 1. core passthroughs (unconditional, may write `Null`)
//! 2. message broker (first match wins)
//! 3. outbound mail (first match wins)
//! 4. key-value cache (each source independently, first claim wins)
//! 5. document store (exactly one add-on, otherwise skipped)
//! 6. document database
//! 7. object-cache passthroughs (unconditional, may write `Null`)

use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::domain::models::names::{env, keys};
use crate::domain::models::{
    Broker, ConfigValue, DocumentStoreSelection, EnvironmentSnapshot, MailProvider, ParsedUri,
    Passthrough, ResolverSettings, CACHE_SOURCES, CORE_PASSTHROUGHS, OBJECT_CACHE_PASSTHROUGHS,
};
use crate::domain::ports::ConfigStore;

/// What a resolution pass detected and wrote.
///
/// Purely informational; the store is the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    /// Selected message broker
    pub broker: Option<Broker>,
    /// Selected mail provider
    pub mail: Option<MailProvider>,
    /// Cache variables that were present and parsed, in claim order
    pub cache_sources: Vec<&'static str>,
    /// Document-store selection outcome
    pub document_store: DocumentStoreSelection,
    /// Whether the Cloudant URL was applied
    pub cloudant: bool,
    /// Keys this pass actually assigned, in assignment order
    pub assigned: Vec<&'static str>,
}

/// Resolves add-on environment variables into configuration keys.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    settings: ResolverSettings,
}

/// Store wrapper recording which keys were actually assigned.
struct Assigner<'a, S: ConfigStore + ?Sized> {
    store: &'a mut S,
    assigned: Vec<&'static str>,
}

impl<'a, S: ConfigStore + ?Sized> Assigner<'a, S> {
    fn new(store: &'a mut S) -> Self {
        Self {
            store,
            assigned: Vec::new(),
        }
    }

    fn set_default(&mut self, key: &'static str, value: impl Into<ConfigValue>) {
        if self.store.set_default(key, value.into()) {
            self.assigned.push(key);
        }
    }
}

impl ConfigResolver {
    /// Create a resolver with the given settings.
    pub const fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    /// Apply every rule group to `store`.
    ///
    /// Keys already present in `store` are never changed. The only diagnostic
    /// condition, several document-store add-ons at once, is logged at error
    /// level and that group is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use addon_config::{
    ///     ConfigResolver, ConfigStore, ConfigValue, EnvironmentSnapshot, MemoryConfigStore,
    /// };
    ///
    /// let env: EnvironmentSnapshot = [("DATABASE_URL", "postgres://u:p@host:5432/db")]
    ///     .into_iter()
    ///     .collect();
    /// let mut store = MemoryConfigStore::new();
    ///
    /// ConfigResolver::default().resolve(&env, &mut store);
    ///
    /// assert_eq!(
    ///     store.get("SQLALCHEMY_DATABASE_URI"),
    ///     Some(&ConfigValue::from("postgres://u:p@host:5432/db"))
    /// );
    /// ```
    #[instrument(level = "debug", skip_all, fields(variables = snapshot.len()))]
    pub fn resolve<S: ConfigStore + ?Sized>(
        &self,
        snapshot: &EnvironmentSnapshot,
        store: &mut S,
    ) -> ResolutionSummary {
        let mut assigner = Assigner::new(store);

        Self::apply_passthroughs(snapshot, &mut assigner, CORE_PASSTHROUGHS);
        let broker = Self::apply_broker(snapshot, &mut assigner);
        let mail = self.apply_mail(snapshot, &mut assigner);
        let cache_sources = Self::apply_cache(snapshot, &mut assigner);
        let document_store = Self::apply_document_store(snapshot, &mut assigner);
        let cloudant = Self::apply_document_database(snapshot, &mut assigner);
        Self::apply_passthroughs(snapshot, &mut assigner, OBJECT_CACHE_PASSTHROUGHS);

        debug!(assigned = assigner.assigned.len(), "configuration resolved");

        ResolutionSummary {
            broker,
            mail,
            cache_sources,
            document_store,
            cloudant,
            assigned: assigner.assigned,
        }
    }

    fn apply_passthroughs<S: ConfigStore + ?Sized>(
        snapshot: &EnvironmentSnapshot,
        assigner: &mut Assigner<'_, S>,
        passthroughs: &[Passthrough],
    ) {
        for passthrough in passthroughs {
            assigner.set_default(passthrough.key, snapshot.get(passthrough.source));
        }
    }

    fn apply_broker<S: ConfigStore + ?Sized>(
        snapshot: &EnvironmentSnapshot,
        assigner: &mut Assigner<'_, S>,
    ) -> Option<Broker> {
        let broker = Broker::detect(snapshot)?;
        let url = snapshot.get(broker.source_var());
        for &key in broker.keys() {
            assigner.set_default(key, url);
        }
        debug!(%broker, "message broker detected");
        Some(broker)
    }

    fn apply_mail<S: ConfigStore + ?Sized>(
        &self,
        snapshot: &EnvironmentSnapshot,
        assigner: &mut Assigner<'_, S>,
    ) -> Option<MailProvider> {
        let provider = MailProvider::detect(snapshot)?;
        let smtp = provider.smtp_settings(snapshot, self.settings.postmark_server_from_env);

        assigner.set_default(keys::SMTP_SERVER, smtp.server.clone());
        assigner.set_default(keys::SMTP_LOGIN, smtp.login.clone());
        assigner.set_default(keys::SMTP_PASSWORD, smtp.password.clone());
        assigner.set_default(keys::MAIL_SERVER, smtp.server);
        assigner.set_default(keys::MAIL_USERNAME, smtp.login);
        assigner.set_default(keys::MAIL_PASSWORD, smtp.password);
        assigner.set_default(keys::MAIL_USE_TLS, true);

        debug!(%provider, "mail provider detected");
        Some(provider)
    }

    fn apply_cache<S: ConfigStore + ?Sized>(
        snapshot: &EnvironmentSnapshot,
        assigner: &mut Assigner<'_, S>,
    ) -> Vec<&'static str> {
        let mut sources = Vec::new();

        for source in CACHE_SOURCES {
            let Some(raw) = snapshot.get_non_empty(source) else {
                continue;
            };
            let uri = ParsedUri::parse(raw);
            assigner.set_default(keys::REDIS_HOST, uri.hostname);
            assigner.set_default(keys::REDIS_PORT, uri.port);
            assigner.set_default(keys::REDIS_PASSWORD, uri.password);
            debug!(source, "redis add-on detected");
            sources.push(source);
        }

        sources
    }

    fn apply_document_store<S: ConfigStore + ?Sized>(
        snapshot: &EnvironmentSnapshot,
        assigner: &mut Assigner<'_, S>,
    ) -> DocumentStoreSelection {
        let selection = DocumentStoreSelection::detect(snapshot);

        match &selection {
            DocumentStoreSelection::Absent => {}
            DocumentStoreSelection::Single(source) => {
                let raw = snapshot.get(source).unwrap_or_default();
                let uri = ParsedUri::parse(raw);
                let database = uri.database_name();

                assigner.set_default(keys::MONGO_URI, raw);
                assigner.set_default(keys::MONGODB_USER, uri.username.clone());
                assigner.set_default(keys::MONGODB_USERNAME, uri.username);
                assigner.set_default(keys::MONGODB_PASSWORD, uri.password);
                assigner.set_default(keys::MONGODB_HOST, uri.hostname);
                assigner.set_default(keys::MONGODB_PORT, uri.port);
                assigner.set_default(keys::MONGODB_DB, database);
                debug!(source = *source, "document store add-on detected");
            }
            DocumentStoreSelection::Ambiguous(sources) => {
                error!(
                    addons = ?sources,
                    "Multiple MongoDB add-ons enabled; cannot determine which to use"
                );
            }
        }

        selection
    }

    fn apply_document_database<S: ConfigStore + ?Sized>(
        snapshot: &EnvironmentSnapshot,
        assigner: &mut Assigner<'_, S>,
    ) -> bool {
        let Some(url) = snapshot.get_non_empty(env::CLOUDANT_URL) else {
            return false;
        };
        assigner.set_default(keys::COUCHDB_SERVER, url);
        true
    }
}
