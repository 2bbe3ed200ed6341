// SPDX-License-Identifier: MPL-2.0
//! Simulated submission backend.
//!
//! Waits a fixed delay, then accepts or rejects the record at random. Nothing
//! is transmitted or stored.

use crate::application::port::FeedbackSubmitter;
use crate::config::{SubmissionConfig, DEFAULT_SUBMISSION_DELAY_MS, DEFAULT_SUCCESS_RATE};
use crate::domain::feedback::{FormRecord, SubmissionOutcome};
use futures_util::future::{BoxFuture, FutureExt};
use rand::Rng;
use std::time::Duration;

/// Message reported when the simulated backend accepts a record.
pub const SUCCESS_MESSAGE: &str = "Feedback submitted!";

/// Message reported when the simulated backend rejects a record.
pub const FAILURE_MESSAGE: &str = "Failed to submit feedback!";

/// Backend stand-in with a configurable latency and acceptance rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedBackend {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedBackend {
    /// Creates a backend. `success_rate` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            DEFAULT_SUCCESS_RATE
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_rate,
        }
    }

    #[must_use]
    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::new(config.delay(), config.success_rate())
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_SUBMISSION_DELAY_MS),
            DEFAULT_SUCCESS_RATE,
        )
    }
}

impl FeedbackSubmitter for SimulatedBackend {
    fn submit(&self, record: FormRecord) -> BoxFuture<'static, SubmissionOutcome> {
        let delay = self.delay;
        let success_rate = self.success_rate;

        async move {
            tracing::debug!(
                stars = record.rating().value(),
                has_file = record.file().is_some(),
                "Simulating feedback submission"
            );
            tokio::time::sleep(delay).await;

            let accepted = rand::rng().random_bool(success_rate);
            if accepted {
                tracing::info!("Simulated backend accepted feedback");
                SubmissionOutcome::success(SUCCESS_MESSAGE)
            } else {
                tracing::warn!("Simulated backend rejected feedback");
                SubmissionOutcome::failure(FAILURE_MESSAGE)
            }
        }
        .boxed()
    }
}
