use std::sync::Mutex;

use async_trait::async_trait;

use crate::email_client::{DeliveryError, EmailSender, OutboundEmail};

/// In-memory `EmailSender` that records every send and answers with a fixed outcome.
pub struct RecordingSender {
    rejection: Option<(u16, String)>,
    sent: Mutex<Vec<(String, OutboundEmail)>>,
}

impl RecordingSender {
    pub fn accepting() -> Self {
        Self {
            rejection: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16, body: &str) -> Self {
        Self {
            rejection: Some((status, body.to_string())),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// `(api_key, email)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, OutboundEmail)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .unwrap()
            .push((api_key.to_string(), email.clone()));

        match &self.rejection {
            Some((status, body)) => Err(DeliveryError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}
