//! Settings management infrastructure
//!
//! Hierarchical settings for the command-line front end using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Validation

pub mod loader;

pub use loader::{SettingsError, SettingsLoader};
