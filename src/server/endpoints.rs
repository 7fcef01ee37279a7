use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use log::{debug, error};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::schemas::{
    ErrorResponse, FailureResponse, HealthResponse, METHOD_NOT_ALLOWED, NO_JSON_DATA,
    SuccessResponse,
};
use crate::error::Result;
use crate::processing::{CandidateInput, OfferInput, PreprocessingPipeline};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PreprocessingPipeline>,
}

/// Paths answered by the health check
const HEALTH_PATHS: &[&str] = &["", "/", "/health"];

/// Health on `GET`; any other non-`POST` request is 405. A `POST` is routed by
/// the first of `/candidate` or `/offer` found in its path, so `/api/candidate`
/// reaches the candidate handler.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path();

    if method == Method::GET && HEALTH_PATHS.contains(&path) {
        return health_endpoint().await.into_response();
    }
    if method != Method::POST {
        return method_not_allowed_endpoint().await;
    }

    if path.contains("/candidate") {
        candidate_endpoint(State(state), body).await
    } else if path.contains("/offer") {
        offer_endpoint(State(state), body).await
    } else if json_object(&body).is_none() {
        bad_request()
    } else {
        unknown_endpoint(uri).await
    }
}

pub async fn health_endpoint() -> impl IntoResponse {
    Json(HealthResponse::default())
}

pub async fn candidate_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(record) = json_object(&body) else {
        return bad_request();
    };

    let pipeline = Arc::clone(&state.pipeline);
    run_timed("candidate", move || {
        let input = CandidateInput::from_value(record)?;
        pipeline.process_candidate(&input)
    })
    .await
}

pub async fn offer_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(record) = json_object(&body) else {
        return bad_request();
    };

    let pipeline = Arc::clone(&state.pipeline);
    run_timed("offer", move || {
        let input = OfferInput::from_value(record)?;
        pipeline.process_offer(&input)
    })
    .await
}

pub async fn unknown_endpoint(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Unknown endpoint: {}", uri.path()))),
    )
        .into_response()
}

pub async fn method_not_allowed_endpoint() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(METHOD_NOT_ALLOWED)),
    )
        .into_response()
}

/// Run a pipeline call off the async runtime and wrap it in the response envelope
async fn run_timed<T, F>(kind: &'static str, task: F) -> Response
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let start = Instant::now();
    let outcome = tokio::task::spawn_blocking(task).await;
    let elapsed_ms = round_millis(start.elapsed());

    match outcome {
        Ok(Ok(result)) => {
            debug!("Processed {} in {:.2} ms", kind, elapsed_ms);
            (StatusCode::OK, Json(SuccessResponse::new(result, elapsed_ms))).into_response()
        }
        Ok(Err(e)) => {
            error!("Error processing {}: {}", kind, e);
            failure(e.to_string())
        }
        Err(e) => {
            error!("Processing task for {} failed: {}", kind, e);
            failure(e.to_string())
        }
    }
}

/// Body parsed as a non-empty JSON object
fn json_object(body: &[u8]) -> Option<Value> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) if !map.is_empty() => Some(Value::Object(map)),
        _ => None,
    }
}

fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(NO_JSON_DATA))).into_response()
}

fn failure(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse::new(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        AppState {
            pipeline: Arc::new(PreprocessingPipeline::new(&Config::default())),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_json_object_rejects_empty_and_invalid_bodies() {
        assert!(json_object(b"").is_none());
        assert!(json_object(b"not json").is_none());
        assert!(json_object(b"{}").is_none());
        assert!(json_object(b"null").is_none());
        assert!(json_object(b"[1, 2]").is_none());
        assert!(json_object(br#"{"titulo": "QA"}"#).is_some());
    }

    #[test]
    fn test_round_millis() {
        assert_eq!(round_millis(Duration::from_micros(12_345)), 12.35);
        assert_eq!(round_millis(Duration::ZERO), 0.0);
    }

    #[tokio::test]
    async fn test_candidate_endpoint_without_body() {
        let response = candidate_endpoint(State(state()), Bytes::new()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], NO_JSON_DATA);
    }

    #[tokio::test]
    async fn test_offer_endpoint_success_envelope() {
        let body = Bytes::from_static(
            br#"{"titulo": "Analista de Datos", "habilidades_obligatorias": ["Python"]}"#,
        );
        let response = offer_endpoint(State(state()), body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["skillsMandatory"], serde_json::json!(["python"]));
        assert!(json["data"]["processingTimeMs"].as_f64().is_some());
    }

    async fn dispatched(method: Method, path: &str, body: &'static [u8]) -> Response {
        dispatch(State(state()), method, path.parse().unwrap(), Bytes::from_static(body)).await
    }

    #[tokio::test]
    async fn test_dispatch_matches_path_fragments() {
        let body = br#"{"technicalSkills": ["Rust"]}"#;
        for path in ["/candidate", "/preprocess/candidate", "/api/v1/candidate"] {
            let response = dispatched(Method::POST, path, body).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(body_json(response).await["data"]["skillsNormalized"], serde_json::json!(["rust"]));
        }

        let response = dispatched(Method::POST, "/api/offer", br#"{"titulo": "QA"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dispatch_rejects_non_post_methods() {
        assert_eq!(dispatched(Method::GET, "/health", b"").await.status(), StatusCode::OK);
        assert_eq!(dispatched(Method::GET, "/", b"").await.status(), StatusCode::OK);

        for (method, path) in [
            (Method::GET, "/missing"),
            (Method::GET, "/preprocess/candidate"),
            (Method::PUT, "/offer"),
            (Method::DELETE, "/health"),
        ] {
            let response = dispatched(method, path, b"").await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", path);
            assert_eq!(body_json(response).await["error"], METHOD_NOT_ALLOWED);
        }
    }

    #[tokio::test]
    async fn test_dispatch_unknown_post_path() {
        let response = dispatched(Method::POST, "/health", br#"{"a": 1}"#).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Unknown endpoint: /health");

        let response = dispatched(Method::POST, "/missing", b"").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let response = unknown_endpoint("/nope".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Unknown endpoint: /nope");
    }
}
