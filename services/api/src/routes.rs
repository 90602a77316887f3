//! API service routes

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};

pub mod categories;
pub mod products;
pub mod users;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/users", get(users::get_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    common::database::health_check(&state.db_pool)
        .await
        .map_err(|e| {
            error!("Health check failed: {}", e);
            ApiError::Unavailable("Database unavailable".to_string())
        })?;

    Ok(Json(json!({
        "status": "ok",
        "service": "catalog-api"
    })))
}
