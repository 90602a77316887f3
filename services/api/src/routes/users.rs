//! User endpoints under `/users`

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
        user::{CreateUserRequest, UpdateUserRequest},
    },
};

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_service.list().await?;

    Ok(Json(Envelope::list(users)))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.get(id).await?;

    Ok(Json(Envelope::data(user)))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(user).with_message("User created successfully")),
    ))
}

/// Update the fields present in the payload
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateUserRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.update(id, payload).await?;

    Ok(Json(
        Envelope::data(user).with_message("User updated successfully"),
    ))
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    state.user_service.delete(id).await?;

    Ok(Json(Envelope::message("User deleted successfully")))
}
