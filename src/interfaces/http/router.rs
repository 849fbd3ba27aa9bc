//! API router with OpenAPI document

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::common::MessageResponse;
use super::modules::users::{self, CreateUserRequest, UpdateUserRequest, UserDto, UserHandlerState};
use crate::application::UserService;
use crate::auth::{basic_auth_middleware, AuthState};

/// Base path the user routes live under
pub const USERS_BASE_PATH: &str = "/api/users";

/// Router wrapped so `/api/users/` and `/api/users` route the same.
pub type App = NormalizePath<Router>;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("Static username/password pair"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(UserDto, CreateUserRequest, UpdateUserRequest, MessageResponse)
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User records CRUD with soft delete"),
    ),
    info(
        title = "User Registry API",
        description = "CRUD backend for user records behind HTTP Basic authentication",
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the route table with the access gate and request tracing applied.
///
/// The gate wraps every route, the OpenAPI document and the fallback.
pub fn create_api_router(user_service: Arc<UserService>, auth: AuthState) -> Router {
    let user_state = UserHandlerState { user_service };

    let user_routes = Router::new()
        .route(
            USERS_BASE_PATH,
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    Router::new()
        .merge(user_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn_with_state(auth, basic_auth_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Full application service: trailing-slash normalization in front of the router.
pub fn create_app(user_service: Arc<UserService>, auth: AuthState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(create_api_router(user_service, auth))
}
