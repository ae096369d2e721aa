use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::ConfigValue;
use crate::domain::ports::ConfigStore;

/// Errors raised while seeding a store with application defaults.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read defaults file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse defaults as a flat mapping of scalars: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// In-memory [`ConfigStore`] with sorted keys.
///
/// Seeded from YAML, it stands in for the host application's explicit
/// configuration when resolving from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemoryConfigStore {
    values: BTreeMap<String, ConfigValue>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a YAML mapping of key to scalar value.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SeedError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let values: BTreeMap<String, ConfigValue> = serde_yaml::from_str(yaml)?;
        Ok(Self { values })
    }

    /// Seed a store from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_yaml_str(&contents)?;
        tracing::debug!(path = %path.display(), keys = store.len(), "seeded configuration store");
        Ok(store)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_string(), value);
    }
}
