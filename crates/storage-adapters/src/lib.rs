//! # storage-adapters
//!
//! Storage implementations of the `domains` ports: the in-memory recipe
//! store and the CSV feed it is seeded from.

pub mod feed;
pub mod memory;

pub use feed::parse_feed;
pub use memory::MemoryRecipeStore;
