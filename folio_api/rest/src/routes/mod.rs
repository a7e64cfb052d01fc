use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;
pub mod health;

/// Logs the error and replies with the generic 500 body. No internal detail
/// ever reaches the client.
pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    internal_server_error_response()
}

pub fn internal_server_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: "Internal Server Error",
        }),
    )
        .into_response()
}
