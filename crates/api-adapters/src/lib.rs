//! # api-adapters
//!
//! The HTTP surface of rusty-recipes: an axum router translating requests
//! into `RecipeStore` calls and domain errors into status codes.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{router, AppState};
