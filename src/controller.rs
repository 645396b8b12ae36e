//! Submission controller: the form state machine plus the one in-flight
//! submission task

use crate::state::{FormSnapshot, FormState, SubmissionStatus, SubmitAttempt};
use crate::submitter::{SubmitError, Submitter};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Owns the form state and drives submissions through a [`Submitter`]
pub struct SubmissionController {
    form: FormState,
    submitter: Arc<dyn Submitter>,
    /// At most one submission runs at a time
    in_flight: Option<JoinHandle<Result<(), SubmitError>>>,
}

impl SubmissionController {
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self {
            form: FormState::new(),
            submitter,
            in_flight: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.form.status()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn push_char(&mut self, c: char) {
        self.form.push_char(c);
    }

    pub fn pop_char(&mut self) {
        self.form.pop_char();
    }

    pub fn clear_input(&mut self) {
        self.form.clear_input();
    }

    /// Submit `current_email`.
    ///
    /// Must be called from within a tokio runtime: a valid address spawns the
    /// submitter task.
    pub fn submit(&mut self, current_email: &str) -> SubmitAttempt {
        if self.in_flight.is_some() {
            return SubmitAttempt::Ignored;
        }

        let attempt = self.form.begin_submit(current_email);
        match &attempt {
            SubmitAttempt::Ignored => {
                tracing::debug!("Submit ignored while {}", self.form.status().label());
            }
            SubmitAttempt::Invalid(reason) => {
                tracing::debug!("Rejected email input: {reason}");
            }
            SubmitAttempt::Started(email) => {
                tracing::info!("Submitting {email} to the waitlist");
                let submitter = Arc::clone(&self.submitter);
                let email = email.clone();
                self.in_flight = Some(tokio::spawn(
                    async move { submitter.submit(&email).await },
                ));
            }
        }
        attempt
    }

    /// Submit whatever is currently in the input buffer
    pub fn submit_input(&mut self) -> SubmitAttempt {
        let current = self.form.snapshot().email;
        self.submit(&current)
    }

    /// Apply the result of a finished submission without blocking.
    /// Returns true if the state changed.
    pub async fn poll_completion(&mut self) -> bool {
        match &self.in_flight {
            Some(handle) if handle.is_finished() => {}
            _ => return false,
        }
        self.wait_for_completion().await;
        true
    }

    /// Wait for the in-flight submission (if any) and apply its result
    pub async fn wait_for_completion(&mut self) {
        let Some(handle) = self.in_flight.take() else {
            return;
        };

        let result = match handle.await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!("Submission task failed: {err}");
                Err(SubmitError::Interrupted)
            }
        };

        match &result {
            Ok(()) => tracing::info!("Waitlist submission accepted"),
            Err(err) => tracing::warn!("Waitlist submission failed: {err}"),
        }
        self.form.complete_submit(result);
    }

    /// Abort the in-flight submission when the view is torn down
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            tracing::info!("Cancelling in-flight submission");
            handle.abort();
        }
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
