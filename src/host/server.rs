//! Inbound HTTP endpoint for host messages.
//!
//! - `POST /message`: one JSON host message. `200` when handed to the event
//!   loop, `400` when the body is not a message, `503` when the loop is gone.
//! - `GET /health`: `ok`.
//!
//! Name resolution happens later, on the event loop, so an unknown name is
//! still accepted here.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::host::message::RawMessage;
use crate::shutdown::ShutdownHandle;

/// Hands a message to the event loop. Returns `false` once the loop is gone.
pub type Inbox = Arc<dyn Fn(RawMessage) -> bool + Send + Sync>;

pub fn router(inbox: Inbox) -> Router {
    Router::new()
        .route("/message", post(post_message))
        .route("/health", get(health))
        .with_state(inbox)
}

pub async fn serve(
    listener: TcpListener,
    inbox: Inbox,
    shutdown: ShutdownHandle,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "accepting host messages");
    }
    axum::serve(listener, router(inbox))
        .with_graceful_shutdown(async move { shutdown.wait().await })
        .await
}

async fn post_message(State(inbox): State<Inbox>, body: Bytes) -> StatusCode {
    let raw: RawMessage = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "malformed host message");
            return StatusCode::BAD_REQUEST;
        }
    };
    tracing::debug!(func = %raw.func, "host message received");
    if inbox(raw) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn health() -> &'static str {
    "ok"
}
