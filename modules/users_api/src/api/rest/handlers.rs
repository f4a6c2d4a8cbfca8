use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::info;

use crate::api::rest::dto::{CreateUserReq, StatusDto, UpdateUserReq, UserDto};
use crate::api::rest::error::ApiError;
use crate::api::rest::response::Envelope;
use crate::contract::model::{NewUser, UserPatch};
use crate::domain::service::Service;

/// Health check; no I/O.
pub async fn health() -> Json<StatusDto> {
    Json(StatusDto {
        status: "healthy",
        message: "Backend API is running",
    })
}

/// Database connectivity check; never touches the users table.
///
/// Reports its own `status`/`message` pair on both outcomes instead of
/// the generic error envelope.
pub async fn database_status(
    Extension(svc): Extension<Arc<Service>>,
) -> (StatusCode, Json<StatusDto>) {
    match svc.check_database().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusDto {
                status: "connected",
                message: "Successfully connected to the database",
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "database status check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusDto {
                    status: "disconnected",
                    message: "Failed to connect to the database",
                }),
            )
        }
    }
}

/// A non-integer id segment means no such resource exists; answer with
/// the JSON not-found envelope rather than the framework's plain-text
/// rejection.
fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::NotFound("Endpoint not found".to_string())),
    }
}

/// List all users, ordered by ascending id.
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Envelope<Vec<UserDto>>>, ApiError> {
    let users = svc.list_users().await?;
    let users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
    Ok(Json(Envelope::data(users)))
}

/// Get a specific user by id.
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<UserDto>>, ApiError> {
    let user = svc.get_user(parse_id(id)?).await?;
    Ok(Json(Envelope::data(user.into())))
}

/// Create a new user. A missing body counts as missing fields.
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    body: Option<Json<CreateUserReq>>,
) -> Result<(StatusCode, Json<Envelope<UserDto>>), ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    info!(username = ?req.username, "Creating user");

    let new_user = NewUser::try_from(req)?;
    let user = svc.create_user(new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message("User created successfully", user.into())),
    ))
}

/// Update a user with partial data.
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<i64>, PathRejection>,
    body: Option<Json<UpdateUserReq>>,
) -> Result<Json<Envelope<UserDto>>, ApiError> {
    let id = parse_id(id)?;
    let req = body.map(|Json(req)| req).unwrap_or_default();
    info!(user_id = id, "Updating user");

    let patch = UserPatch::from(req);
    let user = svc.update_user(id, patch).await?;

    Ok(Json(Envelope::with_message(
        "User updated successfully",
        user.into(),
    )))
}

/// Delete a user by id.
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = parse_id(id)?;
    info!(user_id = id, "Deleting user");

    svc.delete_user(id).await?;
    Ok(Json(Envelope::message("User deleted successfully")))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}
