use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog_core::product::ManagerError;
use catalog_core::storage::{
    manager_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

/// Error returned by every handler, rendered as `{"message": "..."}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(manager_error) = self.0.downcast_ref::<ManagerError>() {
            from_u16(manager_error_to_status_code(manager_error))
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            from_u16(repository_error_to_status_code(repo_error))
        } else if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            json_rejection_status(rejection)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn from_u16(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Payloads that are not JSON at all are a bad request; well-formed JSON with
/// the wrong shape is unprocessable.
fn json_rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
            StatusCode::BAD_REQUEST
        }
        other => other.status(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
            "internal server error".to_string()
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "API error");
            self.0.to_string()
        };

        (status_code, Json(json!({ "message": message }))).into_response()
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
