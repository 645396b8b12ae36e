//! Waitlist form state machine
//!
//! Pure state: no timers or tasks live here. The controller drives the
//! transitions and owns the in-flight submission.

use super::field::InputField;
use crate::submitter::SubmitError;
use crate::validation::{validate_email, EmailAddress, ValidationError};

/// Lifecycle of a single waitlist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the lifetime of the view
    Submitted,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        }
    }
}

/// Outcome of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The form was not idle; nothing changed
    Ignored,
    /// Local validation failed; the form stays idle with an error
    Invalid(ValidationError),
    /// The form moved to `Submitting` for this address
    Started(EmailAddress),
}

/// Rendering-agnostic view of the form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub email: String,
    pub status: SubmissionStatus,
    pub error_message: Option<String>,
}

/// The waitlist form: input buffer, status and the last error
#[derive(Debug, Clone)]
pub struct FormState {
    pub email: InputField,
    status: SubmissionStatus,
    error_message: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            email: InputField::email(),
            status: SubmissionStatus::Idle,
            error_message: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Input is only editable while idle
    pub fn is_editable(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_editable() {
            self.email.push_char(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_editable() {
            self.email.pop_char();
        }
    }

    pub fn clear_input(&mut self) {
        if self.is_editable() {
            self.email.clear();
        }
    }

    /// Start a submission for `current_email`.
    ///
    /// Only an idle form reacts. The error is cleared first, then the value
    /// is validated; a valid address moves the form to `Submitting`.
    pub fn begin_submit(&mut self, current_email: &str) -> SubmitAttempt {
        if self.status != SubmissionStatus::Idle {
            return SubmitAttempt::Ignored;
        }

        self.email.set_value(current_email);
        self.error_message = None;

        match validate_email(current_email) {
            Ok(address) => {
                self.status = SubmissionStatus::Submitting;
                SubmitAttempt::Started(address)
            }
            Err(err) => {
                self.error_message = Some(err.user_message().to_string());
                SubmitAttempt::Invalid(err)
            }
        }
    }

    /// Apply the submitter's result. Ignored unless a submission is in flight.
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Submitted;
            }
            Err(err) => {
                self.status = SubmissionStatus::Idle;
                self.error_message = Some(err.user_message().to_string());
            }
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            email: self.email.value().to_string(),
            status: self.status(),
            error_message: self.error_message().map(str::to_string),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
