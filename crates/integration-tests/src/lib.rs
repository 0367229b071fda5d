//! Shared helpers for the end-to-end tests: an application router over a
//! seeded in-memory store.

use std::sync::Arc;

use api_adapters::{router, AppState};
use axum::Router;
use domains::models::Recipe;
use domains::ports::RecipeStore;
use storage_adapters::MemoryRecipeStore;

/// Builds the full application router over an in-memory store pre-loaded
/// with the given recipes.
pub async fn app(recipes: Vec<Recipe>) -> Router {
    let store = Arc::new(MemoryRecipeStore::new());
    store.bulk_load(recipes).await;
    router(Arc::new(AppState { store }))
}

/// Recipes with ids `1..=count`, one fixture each.
pub fn sample_recipes(count: i64) -> Vec<Recipe> {
    (1..=count).map(Recipe::fixture).collect()
}
