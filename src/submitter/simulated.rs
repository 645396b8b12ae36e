//! Stand-in submitter that accepts every address after a fixed delay

use super::traits::{SubmitError, Submitter};
use crate::validation::EmailAddress;
use async_trait::async_trait;
use std::time::Duration;

/// Accepts any address after sleeping for `delay`
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Delay used when nothing is configured (1.5 seconds)
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, email: &EmailAddress) -> Result<(), SubmitError> {
        tracing::debug!(
            "Simulating submission of {} ({:?})",
            email.as_str(),
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
