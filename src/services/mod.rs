//! Service layer: configuration resolution

pub mod config_resolver;

pub use config_resolver::{ConfigResolver, ResolutionSummary};
