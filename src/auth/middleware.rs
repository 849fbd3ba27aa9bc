//! Authentication middleware for Axum

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use super::basic::{verify_authorization, AuthError, Credentials};
use crate::interfaces::http::common::MessageResponse;

/// Authentication state containing the accepted credential pair
#[derive(Clone)]
pub struct AuthState {
    pub credentials: Arc<Credentials>,
}

impl AuthState {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new(self.to_string())),
        )
            .into_response()
    }
}

/// Basic authentication middleware - every request must carry the configured pair
pub async fn basic_auth_middleware(
    State(auth_state): State<AuthState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let verdict = match request.headers().get(header::AUTHORIZATION) {
        None => verify_authorization(None, &auth_state.credentials),
        Some(value) => match value.to_str() {
            Ok(value) => verify_authorization(Some(value), &auth_state.credentials),
            // Opaque bytes cannot encode the pair
            Err(_) => Err(AuthError::InvalidCredentials),
        },
    };

    match verdict {
        Ok(()) => next.run(request).await,
        Err(e) => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                reason = %e,
                "Rejected request"
            );
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AuthState::new(Credentials::new("admin", "password"));
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn_with_state(state, basic_auth_middleware))
    }

    async fn send(auth: Option<&str>, uri: &str) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let resp = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn passes_valid_credentials() {
        let (status, _) = send(Some("Basic YWRtaW46cGFzc3dvcmQ="), "/ping").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let (status, body) = send(None, "/ping").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "No credentials sent!");
    }

    #[tokio::test]
    async fn rejects_invalid_credentials() {
        let (status, body) = send(Some("Basic invalidcredentials"), "/ping").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn guards_unknown_paths_too() {
        let (status, body) = send(None, "/nowhere").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "No credentials sent!");
    }
}
