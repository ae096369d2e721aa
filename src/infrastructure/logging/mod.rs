//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - Secret scrubbing for displayed configuration values

pub mod logger;
pub mod secret_scrubbing;

pub use logger::init;
pub use secret_scrubbing::{SecretScrubber, REDACTED};
