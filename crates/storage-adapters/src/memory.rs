//! # In-memory recipe store
//!
//! The canonical id → recipe mapping behind one process-wide mutex. Every
//! port operation takes the lock for its whole critical section and releases
//! it before returning; nothing blocks on I/O while holding it.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use domains::error::{AppError, Result};
use domains::models::{Limiter, Recipe, RecipeRate};
use domains::ports::RecipeStore;

/// Concurrency-safe in-memory implementation of [`RecipeStore`].
///
/// Sized only by process memory; nothing is evicted and nothing persists
/// across restarts.
#[derive(Default)]
pub struct MemoryRecipeStore {
    recipes: Mutex<HashMap<i64, Recipe>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn bulk_load(&self, loaded: Vec<Recipe>) -> usize {
        let count = loaded.len();
        let mut recipes = self.recipes.lock();
        for recipe in loaded {
            recipes.insert(recipe.id, recipe);
        }
        count
    }

    async fn create(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self.recipes.lock();
        if recipes.contains_key(&recipe.id) {
            return Err(AppError::Duplicate(recipe.id));
        }
        recipes.insert(recipe.id, recipe);
        Ok(())
    }

    async fn fetch_one(&self, id: i64) -> Result<Recipe> {
        let recipes = self.recipes.lock();
        recipes.get(&id).cloned().ok_or(AppError::NotFound(id))
    }

    async fn fetch_page(&self, limiter: Limiter) -> Vec<Recipe> {
        // HashMap iteration order is arbitrary and can differ between calls,
        // which would leak records across page boundaries. Sorting the keys
        // first makes every page a stable slice of the same total order.
        let ordered: Vec<Recipe> = {
            let recipes = self.recipes.lock();
            let mut ids: Vec<i64> = recipes.keys().copied().collect();
            ids.sort_unstable();
            ids.iter().map(|id| recipes[id].clone()).collect()
        };

        if limiter.limit == 0 {
            return ordered;
        }
        let page = limiter.page.max(1);
        let start = (page - 1).saturating_mul(limiter.limit);
        if start >= ordered.len() {
            return Vec::new();
        }
        let end = start.saturating_add(limiter.limit).min(ordered.len());
        ordered[start..end].to_vec()
    }

    async fn update(&self, id: i64, recipe: Recipe) -> Result<()> {
        let mut recipes = self.recipes.lock();
        if !recipes.contains_key(&id) {
            return Err(AppError::NotFound(id));
        }
        if recipe.id != id {
            // Relocation: the payload moves the record to the id it carries.
            // Refuse to land on an occupied id rather than overwrite an
            // unrelated recipe.
            if recipes.contains_key(&recipe.id) {
                return Err(AppError::Duplicate(recipe.id));
            }
            recipes.remove(&id);
        }
        recipes.insert(recipe.id, recipe);
        Ok(())
    }

    async fn rate(&self, id: i64, rating: RecipeRate) -> Result<()> {
        let mut recipes = self.recipes.lock();
        let recipe = recipes.get_mut(&id).ok_or(AppError::NotFound(id))?;
        recipe.record_rating(rating);
        Ok(())
    }
}
