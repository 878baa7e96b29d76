use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

/// Behaviour of the local counting service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeOptions {
    /// Fixed delta to answer with. When unset the requested amount is echoed.
    pub delta: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct CountQuery {
    amount: Option<String>,
}

pub fn build_router(options: ServeOptions) -> Router {
    Router::new()
        .route("/count", get(count))
        .route("/health", get(health))
        .with_state(options)
}

async fn count(State(options): State<ServeOptions>, Query(query): Query<CountQuery>) -> Response {
    let Some(raw) = query.amount else {
        return bad_request("missing 'amount' query parameter");
    };
    let Ok(amount) = raw.parse::<u32>() else {
        return bad_request("'amount' must be a non-negative integer");
    };

    let delta = options.delta.unwrap_or(i64::from(amount));
    tracing::info!(amount, delta, "Count request");
    Json(json!({ "data": delta })).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn bad_request(message: &str) -> Response {
    tracing::debug!(reason = message, "Rejected count request");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
