//! Email client, the single point of entry for all transactional email sends.
//!
//! No other module talks to the email provider directly. Sends are single
//! best-effort attempts with no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The provider answered with a non-success status. `body` is its response text, verbatim.
    #[error("{body}")]
    Rejected { status: u16, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Request body for the provider's `POST /emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Anything that can hand an email to a provider.
///
/// Carried in `AppState` as `Arc<dyn EmailSender>`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), DeliveryError>;
}

/// Resend HTTP API client.
#[derive(Clone)]
pub struct ResendClient {
    client: Client,
    endpoint: String,
}

impl ResendClient {
    pub fn new(base_url: &str) -> Result<Self, DeliveryError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Email provider accepted message (status {})", status.as_u16());
        Ok(())
    }
}
