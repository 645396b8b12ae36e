//! Trait abstraction for submitting an email so the controller can be tested
//! without real delays or network access

use crate::validation::EmailAddress;
use async_trait::async_trait;
use thiserror::Error;

/// Message shown when a structurally valid email could not be submitted
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failures after local validation succeeded
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The remote side refused the address
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The request never reached the remote side
    #[error("transport failure: {0}")]
    Transport(String),
    /// The submission task panicked or was cancelled
    #[error("submission interrupted")]
    Interrupted,
}

impl SubmitError {
    /// Text presented to the user
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILED_MESSAGE
    }
}

/// Capability for delivering a validated address to the waitlist
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the address. Resolves once the remote side has accepted it.
    async fn submit(&self, email: &EmailAddress) -> Result<(), SubmitError>;
}
