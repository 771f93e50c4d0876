use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// Request-boundary error. Every failure maps to a status plus a JSON message
/// the view layer can surface; none of them takes the process down.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(e) => match e {
                AuthError::MissingField(_) => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
                AuthError::NotFound => StatusCode::NOT_FOUND,
                AuthError::DuplicateUsername => StatusCode::CONFLICT,
                AuthError::Hash(_) | AuthError::Token(_) | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Service(e) => match e {
                ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Db(_) | ServiceError::Export(_) | ServiceError::Model(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %msg, "request failed");
        }
        // Unauthenticated callers get pointed at the login entry point; the
        // view layer turns this into its redirect.
        let body = if matches!(self, ApiError::Auth(AuthError::Unauthenticated)) {
            serde_json::json!({ "error": msg, "login": "/auth/login" })
        } else {
            serde_json::json!({ "error": msg })
        };
        (status, Json(body)).into_response()
    }
}
