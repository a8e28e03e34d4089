use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Failure modes surfaced at the API boundary.
///
/// Store failures keep their source for the server-side log but render as a
/// generic detail string; the driver message never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Internal server error")]
    Store(#[source] sqlx::Error),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // duplicate email is a 400 in the public contract, not a 409
            ApiError::EmailTaken => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            // The email column carries the only unique constraint in the
            // schema, so a unique violation is always a duplicate email.
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::EmailTaken,
            _ => ApiError::Store(e),
        }
    }
}
