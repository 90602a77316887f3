//! Category endpoints under `/api/categories`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    models::{
        Envelope,
        category::{CreateCategoryRequest, UpdateCategoryRequest},
    },
};

/// List all categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let categories = state.category_service.list().await?;

    Ok(Json(Envelope::list(categories)))
}

/// Get a category and the products it owns
pub async fn get_category(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let category = state.category_service.get(id).await?;

    Ok(Json(Envelope::data(category)))
}

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateCategoryRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let category = state.category_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(category).with_message("Category created successfully")),
    ))
}

/// Update the fields present in the payload
pub async fn update_category(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateCategoryRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let category = state.category_service.update(id, payload).await?;

    Ok(Json(
        Envelope::data(category).with_message("Category updated successfully"),
    ))
}

/// Delete a category, refused with 409 while it still owns products
pub async fn delete_category(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    state.category_service.delete(id).await?;

    Ok(Json(Envelope::message("Category deleted successfully")))
}
