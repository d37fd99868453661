//! HTTP host for the relay.
//!
//! - `POST /webhook` takes the chat platform's payload as the raw body and
//!   answers with the invocation's status and body.
//! - `POST /invoke` takes a full proxy-style event and answers 200 with the
//!   `{statusCode, body}` document itself.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::debug;

use crate::webhook::{InvocationResponse, RawEvent, Relay};

/// Build the relay router.
pub fn relay_routes(relay: Relay) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .route("/invoke", post(invoke))
        .with_state(relay)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "workout-relay"
    }))
}

async fn webhook(State(relay): State<Relay>, body: Bytes) -> Response {
    let event = RawEvent::new(String::from_utf8_lossy(&body));
    let resp = relay.handle(&event).await;

    let status = StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, [(header::CONTENT_TYPE, "application/json")], resp.body).into_response()
}

async fn invoke(State(relay): State<Relay>, body: Bytes) -> Json<InvocationResponse> {
    match serde_json::from_slice::<RawEvent>(&body) {
        Ok(event) => Json(relay.handle(&event).await),
        Err(e) => {
            debug!(error = %e, "Invoke payload is not an event");
            Json(InvocationResponse::malformed_input())
        }
    }
}
