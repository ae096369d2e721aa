//! Domain layer for addon-config
//!
//! Add-on detection rules, configuration values, and the store port.

pub mod models;
pub mod ports;
