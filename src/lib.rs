//! addon-config - cloud add-on configuration resolver
//!
//! Maps the environment variables that cloud platforms export for attached
//! add-ons (databases, caches, message brokers, mail relays) into an
//! application's configuration mapping, never overwriting keys the
//! application already set.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): add-on rules, values, and the store port
//! - **Service Layer** (`services`): the resolution pass
//! - **Adapters** (`adapters`): in-memory configuration store
//! - **Infrastructure Layer** (`infrastructure`): settings and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use addon_config::{ConfigResolver, ConfigValue, EnvironmentSnapshot};
//! use std::collections::BTreeMap;
//!
//! let env: EnvironmentSnapshot = [("REDIS_URL", "redis://:secret@cachehost:6379/0")]
//!     .into_iter()
//!     .collect();
//!
//! let mut config: BTreeMap<String, ConfigValue> = BTreeMap::new();
//! ConfigResolver::default().resolve(&env, &mut config);
//!
//! assert_eq!(config["REDIS_HOST"], ConfigValue::from("cachehost"));
//! assert_eq!(config["REDIS_PORT"], ConfigValue::Integer(6379));
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{MemoryConfigStore, SeedError};
pub use domain::models::{
    Broker, ConfigValue, DocumentStoreSelection, EnvironmentSnapshot, MailProvider, ParsedUri,
    ResolverSettings, Settings,
};
pub use domain::ports::ConfigStore;
pub use infrastructure::config::{SettingsError, SettingsLoader};
pub use services::{ConfigResolver, ResolutionSummary};
