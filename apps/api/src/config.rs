use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_FROM_EMAIL: &str = "Portfolio Contact <onboarding@resend.dev>";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Application configuration loaded from environment variables.
///
/// Delivery settings are allowed to be missing at startup; the contact endpoint
/// reports an incomplete configuration per request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub static_dir: Option<PathBuf>,
    pub resend_api_url: String,
    pub delivery: DeliveryConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // .env.local wins over .env; neither overrides the real environment
        dotenvy::from_filename(".env.local").ok();
        dotenvy::dotenv().ok();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            static_dir: optional_env("STATIC_DIR").map(PathBuf::from),
            resend_api_url: optional_env("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            delivery: DeliveryConfig::new(
                optional_env("RESEND_API_KEY"),
                optional_env("CONTACT_TO_EMAIL"),
                optional_env("CONTACT_FROM_EMAIL"),
            ),
        })
    }
}

/// Settings for relaying contact submissions to the email provider.
#[derive(Clone)]
pub struct DeliveryConfig {
    api_key: Option<String>,
    to_email: Option<String>,
    from_email: String,
}

/// The complete set of settings needed for one outbound send.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryCredentials<'a> {
    pub api_key: &'a str,
    pub to_email: &'a str,
    pub from_email: &'a str,
}

impl DeliveryConfig {
    /// Blank values are treated the same as unset ones.
    pub fn new(
        api_key: Option<String>,
        to_email: Option<String>,
        from_email: Option<String>,
    ) -> Self {
        Self {
            api_key: non_blank(api_key),
            to_email: non_blank(to_email),
            from_email: non_blank(from_email).unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
        }
    }

    /// Returns `None` when either the API key or the destination address is missing.
    pub fn credentials(&self) -> Option<DeliveryCredentials<'_>> {
        Some(DeliveryCredentials {
            api_key: self.api_key.as_deref()?,
            to_email: self.to_email.as_deref()?,
            from_email: &self.from_email,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.credentials().is_some()
    }

    pub fn from_email(&self) -> &str {
        &self.from_email
    }
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("to_email", &self.to_email)
            .field("from_email", &self.from_email)
            .finish()
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_config_yields_credentials() {
        let config = DeliveryConfig::new(
            Some("re_123".to_string()),
            Some("me@example.com".to_string()),
            None,
        );
        let creds = config.credentials().unwrap();
        assert_eq!(creds.api_key, "re_123");
        assert_eq!(creds.to_email, "me@example.com");
        assert_eq!(creds.from_email, DEFAULT_FROM_EMAIL);
    }

    #[test]
    fn test_missing_api_key_is_incomplete() {
        let config = DeliveryConfig::new(None, Some("me@example.com".to_string()), None);
        assert!(!config.is_complete());
    }

    #[test]
    fn test_missing_destination_is_incomplete() {
        let config = DeliveryConfig::new(Some("re_123".to_string()), None, None);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = DeliveryConfig::new(
            Some("   ".to_string()),
            Some("me@example.com".to_string()),
            Some(String::new()),
        );
        assert!(!config.is_complete());
        assert_eq!(config.from_email(), DEFAULT_FROM_EMAIL);
    }

    #[test]
    fn test_custom_from_address() {
        let config = DeliveryConfig::new(
            Some("re_123".to_string()),
            Some("me@example.com".to_string()),
            Some("Site <hello@example.com>".to_string()),
        );
        assert_eq!(config.credentials().unwrap().from_email, "Site <hello@example.com>");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = DeliveryConfig::new(Some("re_secret".to_string()), None, None);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("re_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
