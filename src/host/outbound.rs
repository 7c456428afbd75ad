//! Device → host notifications.
//!
//! Both notifications are one-way: nobody waits for a reply, nothing is
//! retried, and a failed delivery is only logged.

use serde_json::{json, Value};
use tokio::runtime::Handle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// The user confirmed the selected menu item.
    ConfirmOrder { item_id: String },
    /// The device was closed.
    CloseBurner,
}

impl OutboundEvent {
    /// Callback name the host listens on.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::ConfirmOrder { .. } => "nui:confirm_order",
            Self::CloseBurner => "nui:close_burner",
        }
    }

    pub fn body(&self) -> Value {
        match self {
            Self::ConfirmOrder { item_id } => json!({ "item_id": item_id }),
            Self::CloseBurner => json!({}),
        }
    }
}

/// Fire-and-forget sink for [`OutboundEvent`]s.
pub trait HostNotifier {
    fn notify(&self, event: OutboundEvent);
}

impl<N: HostNotifier + ?Sized> HostNotifier for Box<N> {
    fn notify(&self, event: OutboundEvent) {
        (**self).notify(event);
    }
}

/// Posts each event as JSON to `{callback_url}/{endpoint}`.
pub struct HttpNotifier {
    client: reqwest::Client,
    callback_url: String,
    handle: Handle,
}

impl HttpNotifier {
    pub fn new(callback_url: impl Into<String>, handle: Handle) -> Self {
        Self {
            client: reqwest::Client::new(),
            callback_url: callback_url.into(),
            handle,
        }
    }

    fn url_for(&self, event: &OutboundEvent) -> String {
        format!(
            "{}/{}",
            self.callback_url.trim_end_matches('/'),
            event.endpoint()
        )
    }
}

impl HostNotifier for HttpNotifier {
    fn notify(&self, event: OutboundEvent) {
        let url = self.url_for(&event);
        let body = event.body();
        let request = self.client.post(&url).json(&body);
        tracing::debug!(%url, "posting host notification");
        self.handle.spawn(async move {
            match request.send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(%url, status = %response.status(), "host rejected notification");
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%url, error = %err, "host notification failed");
                }
            }
        });
    }
}

/// Used when no callback URL is configured: events only reach the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl HostNotifier for LogNotifier {
    fn notify(&self, event: OutboundEvent) {
        tracing::info!(endpoint = event.endpoint(), body = %event.body(), "host notification");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::routing::post;
    use axum::{Json, Router};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    type Received = Arc<Mutex<Vec<(String, Value)>>>;

    async fn capture(
        State(received): State<Received>,
        Path(endpoint): Path<String>,
        Json(body): Json<Value>,
    ) {
        received.lock().push((endpoint, body));
    }

    #[test]
    fn endpoints_and_bodies() {
        let confirm = OutboundEvent::ConfirmOrder {
            item_id: "weed".into(),
        };
        assert_eq!(confirm.endpoint(), "nui:confirm_order");
        assert_eq!(confirm.body(), json!({ "item_id": "weed" }));
        assert_eq!(OutboundEvent::CloseBurner.endpoint(), "nui:close_burner");
        assert_eq!(OutboundEvent::CloseBurner.body(), json!({}));
    }

    #[tokio::test]
    async fn url_ignores_trailing_slash() {
        let notifier = HttpNotifier::new("http://host.local/", Handle::current());
        assert_eq!(
            notifier.url_for(&OutboundEvent::CloseBurner),
            "http://host.local/nui:close_burner"
        );
    }

    #[tokio::test]
    async fn http_notifier_posts_json() {
        let received: Received = Arc::default();
        let app = Router::new()
            .route("/{endpoint}", post(capture))
            .with_state(Arc::clone(&received));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let notifier = HttpNotifier::new(format!("http://{addr}"), Handle::current());
        notifier.notify(OutboundEvent::ConfirmOrder {
            item_id: "coke".into(),
        });

        for _ in 0..100 {
            if !received.lock().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let received = received.lock();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, "nui:confirm_order");
        assert_eq!(received[0].1, json!({ "item_id": "coke" }));
    }

    #[tokio::test]
    async fn unreachable_host_is_ignored() {
        let notifier = HttpNotifier::new("http://127.0.0.1:9", Handle::current());
        notifier.notify(OutboundEvent::CloseBurner);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
