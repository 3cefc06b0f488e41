use crate::config::DeliveryConfig;
use crate::contact::email::compose_email;
use crate::contact::validation::ContactSubmission;
use crate::email_client::EmailSender;
use crate::errors::AppError;

/// Relays a validated submission to the email provider.
///
/// Fails with `AppError::NotConfigured` before touching the network when the
/// API key or destination address is missing. Makes at most one send.
pub async fn deliver(
    sender: &dyn EmailSender,
    config: &DeliveryConfig,
    submission: &ContactSubmission,
) -> Result<(), AppError> {
    let creds = config.credentials().ok_or(AppError::NotConfigured)?;
    let email = compose_email(submission, &creds);
    sender.send(creds.api_key, &email).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::test_support::RecordingSender;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            message: "Hello, this is a test message.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_config_never_sends() {
        let sender = RecordingSender::accepting();
        let config = DeliveryConfig::new(None, Some("me@example.com".to_string()), None);

        let err = deliver(&sender, &config, &submission()).await.unwrap_err();

        assert!(matches!(err, AppError::NotConfigured));
        assert_eq!(sender.sent().len(), 0);
    }

    #[tokio::test]
    async fn test_sends_once_with_api_key() {
        let sender = RecordingSender::accepting();
        let config = DeliveryConfig::new(
            Some("re_key".to_string()),
            Some("me@example.com".to_string()),
            None,
        );

        deliver(&sender, &config, &submission()).await.unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "re_key");
        assert_eq!(sent[0].1.to, vec!["me@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_rejection_becomes_delivery_error() {
        let sender = RecordingSender::rejecting(422, "bad from");
        let config = DeliveryConfig::new(
            Some("re_key".to_string()),
            Some("me@example.com".to_string()),
            None,
        );

        let err = deliver(&sender, &config, &submission()).await.unwrap_err();

        assert_eq!(err.to_string(), "Email send failed: bad from");
        assert_eq!(sender.sent().len(), 1);
    }
}
