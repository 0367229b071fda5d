//! # HTTP handlers
//!
//! One handler per store operation. Handlers only bind the request, call the
//! port, and map the outcome; every business rule lives behind the port.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use domains::models::{Limiter, Recipe, RecipeRate};
use domains::ports::RecipeStore;

use crate::error::ApiError;

/// State shared across all handlers.
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

/// Builds the recipe router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/{id}", get(get_recipe).put(update_recipe))
        .route("/recipes/{id}/rates", post(rate_recipe))
        .with_state(state)
}

/// Pagination query parameters; both are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    limit: Option<usize>,
    page: Option<usize>,
}

impl From<ListParams> for Limiter {
    fn from(params: ListParams) -> Self {
        Limiter {
            // No limit means pagination disabled, not a default page size.
            limit: params.limit.unwrap_or(0),
            page: params.page.unwrap_or(1),
        }
    }
}

async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(recipe): Json<Recipe>,
) -> Result<StatusCode, ApiError> {
    let id = recipe.id;
    state.store.create(recipe).await?;
    tracing::info!(id, "recipe created");
    Ok(StatusCode::CREATED)
}

async fn list_recipes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Recipe>> {
    Json(state.store.fetch_page(params.into()).await)
}

async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, ApiError> {
    Ok(Json(state.store.fetch_one(id).await?))
}

async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(recipe): Json<Recipe>,
) -> Result<StatusCode, ApiError> {
    state.store.update(id, recipe).await?;
    tracing::info!(id, "recipe updated");
    Ok(StatusCode::OK)
}

async fn rate_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(rating): Json<RecipeRate>,
) -> Result<StatusCode, ApiError> {
    let score = rating.rate;
    state.store.rate(id, rating).await?;
    tracing::info!(id, score, "recipe rated");
    Ok(StatusCode::CREATED)
}
