use axum::{routing, Json, Router};
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
}

// Liveness only. There is no database, cache or mail server to probe; the
// spreadsheet service is only contacted on submission.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { http: true })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn ok() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&*body, br#"{"http":true}"#);
    }
}
