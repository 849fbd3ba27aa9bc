//! User records API handlers
//!
//! Thin wrappers: parse the id, hand validated input to `UserService`,
//! and turn an absent record into 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::UserService;
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid user ID '{}'", raw)))
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("User '{}' not found", id))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    security(("basic_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state.user_service.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Live users", body = Vec<UserDto>),
        (status = 401, description = "Unauthorized", body = MessageResponse)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.get_all_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("basic_auth" = [])),
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let id = parse_user_id(&id)?;

    match state.user_service.get_user_by_id(id).await? {
        Some(user) => Ok(Json(UserDto::from(user))),
        None => Err(not_found(id)),
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    security(("basic_auth" = [])),
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Malformed ID or invalid field", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let id = parse_user_id(&id)?;

    match state.user_service.update_user(id, request.into()).await? {
        Some(user) => Ok(Json(UserDto::from(user))),
        None => Err(not_found(id)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    security(("basic_auth" = [])),
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&id)?;

    match state.user_service.delete_user(id).await? {
        Some(_) => Ok(Json(MessageResponse::new("User deleted successfully"))),
        None => Err(not_found(id)),
    }
}
