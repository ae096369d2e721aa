//! Infrastructure layer module
//!
//! - Settings management
//! - Logging infrastructure

pub mod config;
pub mod logging;
