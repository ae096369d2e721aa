//! Adapters implementing domain ports

pub mod memory_store;

pub use memory_store::{MemoryConfigStore, SeedError};
