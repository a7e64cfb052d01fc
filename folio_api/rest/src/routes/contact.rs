use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactService, ContactSubmitError};

use super::{internal_server_error, internal_server_error_response};
use crate::models::contact::{parse_submission, SubmitResponse};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    // A body that is not JSON at all is not distinguished from any other
    // failure. Anything that parses goes through field validation instead.
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return internal_server_error(rejection),
    };

    let submission = match parse_submission(body) {
        Ok(submission) => submission,
        Err(errors) => return (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
    };

    match service.submit(submission.into()).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(SubmitResponse {
                success: true,
                message: "Data saved successfully",
            }),
        )
            .into_response(),
        // The cause was already logged where the append failed.
        Err(ContactSubmitError::Append) => internal_server_error_response(),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
