//! # demod — toy request/response demo service
//!
//! Two stateless endpoints, no persistence, no shared state with the
//! dashboard service. Kept as a separate process on its own port.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

fn app() -> Router {
    Router::new()
        .route("/getdatalampu", get(lamp_data))
        .route("/kirimdataorang", post(echo_person))
        .layer(TraceLayer::new_for_http())
}

/// `GET /getdatalampu` — fixed demo message.
async fn lamp_data() -> &'static str {
    "data lampu"
}

/// `POST /kirimdataorang` — echoes the posted JSON body, or reports its
/// absence. Anything that does not parse as JSON counts as absent.
async fn echo_person(body: Bytes) -> Response {
    match serde_json::from_slice::<Value>(&body) {
        Ok(value) => Json(value).into_response(),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No JSON payload supplied"})),
        )
            .into_response(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let bind_addr = std::env::var("DEMOD_BIND").unwrap_or_else(|_| "0.0.0.0:5001".to_string());
    tracing::info!(addr = %bind_addr, "demod listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_return_fixed_lamp_message() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/getdatalampu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"data lampu");
    }

    #[tokio::test]
    async fn should_echo_posted_json() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kirimdataorang")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"budi","age":23}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"name": "budi", "age": 23}));
    }

    #[tokio::test]
    async fn should_reject_missing_json_payload() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kirimdataorang")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "No JSON payload supplied");
    }
}
