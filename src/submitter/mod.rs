//! Submission backends for the waitlist form

mod simulated;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use traits::{SubmitError, Submitter, SUBMIT_FAILED_MESSAGE};

#[cfg(test)]
pub use traits::MockSubmitter;
