//! HTTP trigger surface.
//!
//! `POST /run` triggers one pipeline run: a body of `{ "swap": ... }` runs
//! the direct path, an empty body runs discovery. Each request is bounded by
//! a timeout so a hung collaborator cannot block the server.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use swapwatch_core::SwapEvent;
use swapwatch_engine::SwapPipeline;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SwapPipeline>,
}

#[derive(Deserialize)]
struct TriggerBody {
    swap: SwapEvent,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/run", post(run))
        .route("/health", get(health))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn run(State(state): State<AppState>, body: Bytes) -> Response {
    let trigger = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<TriggerBody>(&body) {
            Ok(trigger) => Some(trigger.swap),
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("invalid trigger body: {err}") })),
                )
                    .into_response();
            }
        }
    };

    let result = match trigger {
        Some(event) => state.pipeline.run_direct(event).await,
        None => state.pipeline.run_discovered().await,
    };

    match result {
        Ok(outcome) => {
            info!(outcome = outcome.label(), "Run finished");
            match serde_json::to_value(&outcome) {
                Ok(value) => (StatusCode::OK, Json(value)).into_response(),
                Err(err) => {
                    error!(error = %err, "Failed to serialize outcome");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": err.to_string() })),
                    )
                        .into_response()
                }
            }
        }
        Err(err) => {
            error!(error = %err, "Run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
