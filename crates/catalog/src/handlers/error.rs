use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use catalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A request the handler refuses to process (unparsable body, missing fields).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BadRequest(pub String);

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(bad_request) = self.0.downcast_ref::<BadRequest>() {
            return error_response(StatusCode::BAD_REQUEST, bad_request.to_string());
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound { entity_type, .. }) => {
                error_response(StatusCode::NOT_FOUND, format!("{entity_type} not found"))
            }
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                error_response(status, repo_error.to_string())
            }
            None => error_response(StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Builds a JSON error response and logs it.
///
/// Server faults are logged at `error`, client mistakes at `warn`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let error = message.into();
    if status.is_server_error() {
        tracing::error!(status = %status, message = %error, "API error");
    } else {
        tracing::warn!(status = %status, message = %error, "API error");
    }
    (status, Json(ErrorBody { error })).into_response()
}
