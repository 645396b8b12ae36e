//! Email address shape validation
//!
//! Only the structural shape is checked (local part, a single `@`, a dotted
//! domain). Deliverability is the submitter's concern.

use std::fmt;
use thiserror::Error;

/// Message shown for every validation failure
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is empty")]
    Empty,
    #[error("email has no '@'")]
    MissingAt,
    #[error("email has more than one '@'")]
    MultipleAt,
    #[error("local part is malformed")]
    InvalidLocalPart,
    #[error("domain is malformed")]
    InvalidDomain,
    #[error("email is longer than 254 characters")]
    TooLong,
}

impl ValidationError {
    /// Text presented to the user
    pub fn user_message(&self) -> &'static str {
        INVALID_EMAIL_MESSAGE
    }
}

/// A structurally valid email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate raw input, returning the trimmed address on success
pub fn validate_email(input: &str) -> Result<EmailAddress, ValidationError> {
    let candidate = input.trim();
    if candidate.is_empty() {
        return Err(ValidationError::Empty);
    }
    if candidate.len() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong);
    }

    let mut parts = candidate.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        (Some(_), None, _) => return Err(ValidationError::MissingAt),
        _ => return Err(ValidationError::MultipleAt),
    };

    if !is_valid_local(local) {
        return Err(ValidationError::InvalidLocalPart);
    }
    if !is_valid_domain(domain) {
        return Err(ValidationError::InvalidDomain);
    }

    Ok(EmailAddress(candidate.to_string()))
}

fn is_valid_local(local: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || "_'+-.".contains(c);
    let allowed_last = |c: char| c.is_ascii_alphanumeric() || "_+-".contains(c);

    !local.starts_with('.')
        && !local.contains("..")
        && local.len() <= MAX_LOCAL_LEN
        && local.chars().all(allowed)
        && local.chars().last().is_some_and(allowed_last)
}

fn is_valid_domain(domain: &str) -> bool {
    let Some((hosts, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    // Host labels may end with '-' but never start with one
    let hosts_ok = hosts.split('.').all(|label| {
        label.len() <= MAX_LABEL_LEN
            && label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    hosts_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
