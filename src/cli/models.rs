use serde::Serialize;
use std::fmt;

use crate::domain::models::ConfigValue;

/// Where a configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Set by the application before resolution
    Application,
    /// Assigned by the resolver
    Resolved,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// One row of resolved configuration, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: ConfigValue,
    pub source: ValueSource,
}
