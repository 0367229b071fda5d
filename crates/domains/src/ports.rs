//! # Core Ports
//!
//! Storage contracts an adapter must implement to back the service.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Limiter, Recipe, RecipeRate};

/// Storage contract for recipe records.
///
/// Every operation takes effect atomically with respect to the others:
/// concurrent callers observe each call as an indivisible unit, and a read
/// racing a rating sees either the old or the new average, never a torn one.
/// Fetches return owned copies; a caller holding a returned recipe is
/// isolated from later mutations of the stored one.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Inserts every record keyed by its id, silently overwriting existing
    /// entries (last writer wins, unlike [`create`](Self::create)). Returns
    /// the number of records inserted.
    async fn bulk_load(&self, recipes: Vec<Recipe>) -> usize;

    /// Inserts a new recipe. Fails with [`AppError::Duplicate`] and leaves
    /// the store unchanged if the id is already taken.
    ///
    /// [`AppError::Duplicate`]: crate::error::AppError::Duplicate
    async fn create(&self, recipe: Recipe) -> Result<()>;

    /// Returns the recipe stored under `id`, or [`AppError::NotFound`].
    ///
    /// [`AppError::NotFound`]: crate::error::AppError::NotFound
    async fn fetch_one(&self, id: i64) -> Result<Recipe>;

    /// Returns a page of all recipes ordered by ascending id.
    ///
    /// Ordering is part of the contract: page N+1 never repeats a record
    /// from page N. An out-of-range page yields an empty vec, not an error.
    async fn fetch_page(&self, limiter: Limiter) -> Vec<Recipe>;

    /// Replaces the recipe stored under `id`. If the payload carries a
    /// different id the record relocates to it; relocation onto an id that
    /// is already taken is rejected with `Duplicate` and changes nothing.
    async fn update(&self, id: i64, recipe: Recipe) -> Result<()>;

    /// Appends a rating to the recipe's history and refreshes its average.
    async fn rate(&self, id: i64, rating: RecipeRate) -> Result<()>;
}
