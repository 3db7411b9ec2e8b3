//! Health check endpoint.

use axum::http::StatusCode;

/// GET / - Liveness probe.
///
/// Returns 200 with an empty body as soon as the server accepts connections.
#[axum::debug_handler]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
