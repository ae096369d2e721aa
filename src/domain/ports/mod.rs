//! Port trait definitions (Hexagonal Architecture)
//!
//! - ConfigStore: the application-owned configuration mapping the resolver writes into

pub mod config_store;

pub use config_store::ConfigStore;
