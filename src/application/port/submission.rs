// SPDX-License-Identifier: MPL-2.0
//! Feedback submission port definition.
//!
//! This module defines the [`FeedbackSubmitter`] trait: the seam between the
//! form and whatever backend receives the feedback.
//!
//! # Design Notes
//!
//! - The returned future is `'static` so the caller can hand it to
//!   `iced::Task::perform` without borrowing the submitter
//! - Failures are data ([`SubmissionOutcome::Failure`]), not errors
//! - The trait is `Send + Sync` so one instance can be shared behind an `Arc`

use crate::domain::feedback::{FormRecord, SubmissionOutcome};
use futures_util::future::BoxFuture;

/// Sends a completed form record somewhere and reports how it went.
pub trait FeedbackSubmitter: Send + Sync {
    /// Starts a submission of `record`.
    ///
    /// The future resolves exactly once with the backend's answer.
    fn submit(&self, record: FormRecord) -> BoxFuture<'static, SubmissionOutcome>;
}
