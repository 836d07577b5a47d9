//! SMS webhook adapter
//!
//! Twilio POSTs the inbound message to `/sms` as form fields; the reply
//! travels back as a TwiML `<Response><Message>` envelope. `GET /` is a
//! liveness page for browser checks.

use axum::extract::{Form, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::application::errors::ListrError;
use crate::application::messaging::render::FAILURE_REPLY;
use crate::application::services::ListService;
use crate::domain::traits::ListStore;

/// Form fields of interest in a Twilio inbound-message webhook.
#[derive(Debug, Deserialize)]
pub struct SmsForm {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "MessageSid", default)]
    pub message_sid: String,
}

pub fn build_router<S: ListStore + 'static>(service: Arc<ListService<S>>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/sms", post(sms_handler::<S>))
        .with_state(service)
}

/// Bind and serve the webhook until the process is stopped.
pub async fn serve<S: ListStore + 'static>(
    service: Arc<ListService<S>>,
    bind: &str,
) -> Result<(), ListrError> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| ListrError::Transport(format!("bind {} failed: {}", bind, e)))?;
    tracing::info!("listr webhook listening on {}", bind);

    axum::serve(listener, build_router(service))
        .await
        .map_err(|e| ListrError::Transport(format!("server error: {}", e)))
}

async fn health_handler() -> &'static str {
    "Listr is alive."
}

async fn sms_handler<S: ListStore + 'static>(
    State(service): State<Arc<ListService<S>>>,
    Form(form): Form<SmsForm>,
) -> Response {
    let from = form.from.trim();
    if from.is_empty() {
        // A webhook without a sender is a caller error, not a message.
        return (StatusCode::BAD_REQUEST, "missing From").into_response();
    }

    let reply = match service.handle(from, &form.body).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("[{}] request failed (sid '{}'): {}", from, form.message_sid, e);
            FAILURE_REPLY.to_string()
        }
    };

    twiml(&reply)
}

/// Wrap a reply in the TwiML message envelope.
fn twiml(reply: &str) -> Response {
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(reply)
    );
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("eggs & milk"), "eggs &amp; milk");
        assert_eq!(escape_xml("<b>“x”</b>"), "&lt;b&gt;“x”&lt;/b&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[tokio::test]
    async fn test_twiml_envelope_wraps_reply() {
        let (parts, body) = twiml("Added: eggs & milk").into_parts();
        assert_eq!(
            parts
                .headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/xml")
        );

        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let xml = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<Message>Added: eggs &amp; milk</Message>"));
    }
}
