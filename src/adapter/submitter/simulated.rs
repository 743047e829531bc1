//! Simulated bet placement with latency and random failures.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use crate::domain::{BetId, BetTicket};
use crate::error::SubmissionError;
use crate::port::BetSubmitter;

/// Message shown when the simulated backend rejects a bet.
pub const SIMULATED_FAILURE: &str = "Failed to place bet. Please try again.";

/// Waits `latency`, then fails with probability `failure_rate`.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
    failure_rate: f64,
}

impl SimulatedSubmitter {
    /// `failure_rate` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            latency,
            failure_rate,
        }
    }

    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), 0.1)
    }
}

#[async_trait]
impl BetSubmitter for SimulatedSubmitter {
    async fn submit(&self, ticket: &BetTicket) -> Result<BetId, SubmissionError> {
        ticket.validate()?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        // keep the RNG out of scope across the await above
        let (failed, number) = {
            let mut rng = rand::thread_rng();
            (rng.gen_bool(self.failure_rate), rng.gen_range(0..10_000_000u32))
        };
        if failed {
            debug!("Simulated submission failure");
            return Err(SubmissionError::Rejected(SIMULATED_FAILURE.to_string()));
        }
        Ok(BetId::new(format!("BET-{number}")))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
