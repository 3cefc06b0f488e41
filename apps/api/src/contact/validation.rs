use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::errors::AppError;

// U+FEFF (byte order mark) counts as whitespace for trimming and in addresses,
// although neither `char::is_whitespace` nor `\s` include it.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// A contact form submission whose fields are trimmed and satisfy all constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameTooShort => "name",
            ValidationError::InvalidEmail => "email",
            ValidationError::MessageTooShort => "message",
        }
    }
}

/// Parses a raw request body into a JSON object.
///
/// An empty body is an empty object. Anything else that is not valid JSON, or
/// is JSON but not an object, is `AppError::InvalidJson`.
pub fn parse_payload(raw: &[u8]) -> Result<Map<String, Value>, AppError> {
    if raw.is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::InvalidJson),
    }
}

/// Validates a parsed payload. Checks run name → email → message and stop
/// at the first failure.
pub fn validate_submission(
    payload: &Map<String, Value>,
) -> Result<ContactSubmission, ValidationError> {
    let name = trimmed_field(payload, "name");
    let email = trimmed_field(payload, "email");
    let message = trimmed_field(payload, "message");

    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(ContactSubmission {
        name,
        email,
        message,
    })
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Missing, null and non-string values all read as "".
fn trimmed_field(payload: &Map<String, Value>, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim_matches(is_blank)
        .to_string()
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
