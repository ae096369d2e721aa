//! Domain models

pub mod addon;
pub mod config_value;
pub mod environment;
pub mod names;
pub mod settings;
pub mod uri;

pub use addon::{
    Broker, DocumentStoreSelection, MailProvider, Passthrough, SmtpSettings, CACHE_SOURCES,
    CORE_PASSTHROUGHS, DOCUMENT_STORE_SOURCES, OBJECT_CACHE_PASSTHROUGHS,
};
pub use config_value::ConfigValue;
pub use environment::EnvironmentSnapshot;
pub use settings::{LogFormat, LoggingConfig, ResolverSettings, Settings};
pub use uri::ParsedUri;
