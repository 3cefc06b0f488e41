use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::contact::validation::ValidationError;
use crate::email_client::DeliveryError;

/// Application-level error type. Every variant is terminal for the request it
/// was raised in; `status` and `body` give the HTTP reply for it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Email service is not configured. Set RESEND_API_KEY and CONTACT_TO_EMAIL.")]
    NotConfigured,

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Email send failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidJson | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured | AppError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the caller. Only validation errors name a field.
    pub fn body(&self) -> Value {
        match self {
            AppError::Validation(e) => json!({
                "message": e.to_string(),
                "field": e.field(),
            }),
            other => json!({ "message": other.to_string() }),
        }
    }

    /// Logs the error at a level matching whose problem it is.
    pub fn log(&self) {
        match self {
            AppError::NotConfigured => {
                tracing::error!("Contact delivery is not configured");
            }
            AppError::Delivery(DeliveryError::Rejected { status, body }) => {
                tracing::error!(status = *status, "Email provider rejected message: {body}");
            }
            AppError::Delivery(e) => {
                tracing::error!("Email delivery failed: {e}");
            }
            AppError::Validation(e) => {
                tracing::debug!(field = e.field(), "Contact submission rejected: {e}");
            }
            AppError::InvalidJson | AppError::MethodNotAllowed => {
                tracing::debug!("Contact request rejected: {self}");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), Json(self.body())).into_response()
    }
}
