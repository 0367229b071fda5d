//! # AppError
//!
//! Centralized error handling for the rusty-recipes ecosystem.

use thiserror::Error;

/// The primary error type for all domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No recipe stored under the requested id.
    #[error("recipe {0} not found")]
    NotFound(i64),

    /// A recipe with this id already exists.
    #[error("recipe {0} already exists")]
    Duplicate(i64),

    /// Malformed feed data: bad row structure, numeric field, or timestamp.
    /// Fatal to the batch it occurs in; nothing from that batch is committed.
    #[error("recipe data parse failure: {0}")]
    Parse(String),
}

/// A specialized Result type for rusty-recipes logic.
pub type Result<T> = std::result::Result<T, AppError>;
