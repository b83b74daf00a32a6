//! Handle `gly webhook` — the inbound contact-form listener.
//!
//! A single-endpoint tiny_http server: `POST /webhook/contact` with a JSON
//! payload runs the intake flow and answers JSON. Everything else is a 404.
//! The loop runs until the process is killed.

use std::io::Read;

use gly_core::responses::{InquiryPayload, WebhookAck};
use gly_db::error::DatabaseError;

use crate::cli::root_commands::WebhookArgs;
use crate::context::AppContext;

pub async fn handle(args: &WebhookArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let port = args.port.unwrap_or(ctx.config.webhook.port);
    let server = tiny_http::Server::http(format!("127.0.0.1:{port}"))
        .map_err(|error| anyhow::anyhow!("failed to bind webhook listener: {error}"))?;

    eprintln!("Webhook listening on http://127.0.0.1:{port}/webhook/contact (Ctrl-C to stop)");

    loop {
        // tiny_http::recv blocks; block_in_place keeps the runtime breathing.
        let request = tokio::task::block_in_place(|| server.recv())?;
        respond(ctx, request).await;
    }
}

fn is_contact_request(method: &tiny_http::Method, url: &str) -> bool {
    let path = url.split('?').next().unwrap_or(url);
    *method == tiny_http::Method::Post && path == "/webhook/contact"
}

async fn respond(ctx: &AppContext, mut request: tiny_http::Request) {
    let (code, ack) = if is_contact_request(request.method(), request.url()) {
        let mut body = String::new();
        if request.as_reader().read_to_string(&mut body).is_err() {
            (400, WebhookAck::error("unreadable request body"))
        } else {
            match serde_json::from_str::<InquiryPayload>(&body) {
                Err(_) => (400, WebhookAck::error("invalid JSON payload")),
                Ok(payload) => match ctx.service.ingest_inquiry(&payload).await {
                    Ok(receipt) => (200, WebhookAck::success(receipt.project.id)),
                    Err(DatabaseError::Payload(error)) => (400, WebhookAck::error(error.to_string())),
                    Err(error) => {
                        tracing::error!(%error, "webhook intake failed");
                        (500, WebhookAck::error("Failed to process inquiry"))
                    }
                },
            }
        }
    } else {
        (404, WebhookAck::error("not found"))
    };

    let body = serde_json::to_string(&ack)
        .unwrap_or_else(|_| String::from(r#"{"status":"error","message":"serialization failed"}"#));
    let mut response = tiny_http::Response::from_string(body).with_status_code(code);
    if let Ok(header) =
        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
    {
        response = response.with_header(header);
    }

    if let Err(error) = request.respond(response) {
        tracing::warn!(%error, "failed to send webhook response");
    }
}

#[cfg(test)]
mod tests {
    use super::is_contact_request;
    use tiny_http::Method;

    #[test]
    fn contact_route_matches_post_only() {
        assert!(is_contact_request(&Method::Post, "/webhook/contact"));
        assert!(is_contact_request(&Method::Post, "/webhook/contact?src=site"));
        assert!(!is_contact_request(&Method::Get, "/webhook/contact"));
        assert!(!is_contact_request(&Method::Post, "/webhook/other"));
        assert!(!is_contact_request(&Method::Post, "/"));
    }
}
