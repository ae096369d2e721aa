//! CLI subcommand implementations

pub mod addons;
pub mod resolve;

pub use addons::AddonsArgs;
pub use resolve::ResolveArgs;
