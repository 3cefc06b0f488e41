use std::future::Future;

use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, Request, State},
    http::{header, HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DeliveryConfig;
use crate::contact::delivery::deliver;
use crate::contact::validation::{parse_payload, validate_submission};
use crate::email_client::EmailSender;
use crate::errors::AppError;
use crate::state::AppState;

/// Upper bound on a contact request body. Both adapters enforce it.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSentResponse {
    pub success: bool,
    pub message: &'static str,
}

impl ContactSentResponse {
    fn sent() -> Self {
        Self {
            success: true,
            message: "Message sent successfully",
        }
    }
}

/// The contact pipeline, independent of how the request arrived.
///
/// Steps, each terminal on failure: method → configuration → JSON parse →
/// validation → delivery. `read_body` is only awaited once the method and
/// configuration checks have passed.
pub async fn process_contact<F, Fut>(
    method: &Method,
    headers: &HeaderMap,
    read_body: F,
    config: &DeliveryConfig,
    sender: &dyn EmailSender,
) -> Result<Json<ContactSentResponse>, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Bytes, AppError>>,
{
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }
    if !config.is_complete() {
        return Err(AppError::NotConfigured);
    }

    if !is_json_content_type(headers) {
        debug!("Contact request without a JSON content type; parsing body anyway");
    }

    let raw = read_body().await?;
    let payload = parse_payload(&raw)?;
    let submission = validate_submission(&payload)?;

    deliver(sender, config, &submission).await?;

    info!("Contact message relayed");
    Ok(Json(ContactSentResponse::sent()))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// ANY /api/contact
///
/// Whole-body adapter: axum buffers the body up front, capped at
/// `MAX_BODY_BYTES` by the route's `DefaultBodyLimit`. A failed read is only
/// reported if the pipeline gets as far as asking for the body.
pub async fn handle_contact(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactSentResponse>, AppError> {
    process_contact(
        &method,
        &headers,
        || async move {
            body.map_err(|e| {
                debug!("Failed to read contact request body: {e}");
                AppError::InvalidJson
            })
        },
        &state.config.delivery,
        state.email.as_ref(),
    )
    .await
}

/// ANY /api/contact/stream
pub async fn handle_contact_stream(State(state): State<AppState>, req: Request) -> Response {
    contact_service(&state, req).await
}

/// Streaming adapter: takes a plain `http::Request` and drains its body only
/// once the pipeline asks for it. Usable from any hyper-compatible host.
pub async fn contact_service(state: &AppState, req: Request<Body>) -> Response {
    let (parts, body) = req.into_parts();

    process_contact(
        &parts.method,
        &parts.headers,
        || async move {
            axum::body::to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|e| {
                    debug!("Failed to read contact request body: {e}");
                    AppError::InvalidJson
                })
        },
        &state.config.delivery,
        state.email.as_ref(),
    )
    .await
    .into_response()
}
