//! Product endpoints under `/api/products`

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    models::{
        Envelope,
        product::{CreateProductRequest, ProductQuery, UpdateProductRequest},
    },
};

/// List products, optionally filtered with `?category={id}`
pub async fn list_products(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ProductQuery>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let products = state.product_service.list(&query).await?;

    Ok(Json(Envelope::list(products)))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let product = state.product_service.get(id).await?;

    Ok(Json(Envelope::data(product)))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProductRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let product = state.product_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(product).with_message("Product created successfully")),
    ))
}

/// Update the fields present in the payload
pub async fn update_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateProductRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let product = state.product_service.update(id, payload).await?;

    Ok(Json(
        Envelope::data(product).with_message("Product updated successfully"),
    ))
}

/// Delete a product by ID
pub async fn delete_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    state.product_service.delete(id).await?;

    Ok(Json(Envelope::message("Product deleted successfully")))
}
