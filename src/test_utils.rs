// SPDX-License-Identifier: MPL-2.0
//! Test utilities: a deterministic submitter and ready-made form records.
//!
//! Compiled into the library so integration tests under `tests/` can share
//! them with the unit tests.

use crate::application::port::FeedbackSubmitter;
use crate::domain::feedback::{
    Attachment, FieldUpdate, FormLimits, FormRecord, SubmissionOutcome,
};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Submitter that answers immediately with a fixed outcome and records calls.
#[derive(Debug)]
pub struct FixedSubmitter {
    outcome: SubmissionOutcome,
    calls: AtomicUsize,
    last_record: Mutex<Option<FormRecord>>,
}

impl FixedSubmitter {
    pub fn new(outcome: SubmissionOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_record: Mutex::new(None),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(SubmissionOutcome::success("Feedback submitted!"))
    }

    pub fn failing() -> Self {
        Self::new(SubmissionOutcome::failure("Failed to submit feedback!"))
    }

    /// Number of times [`FeedbackSubmitter::submit`] was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Record passed to the most recent call.
    pub fn last_record(&self) -> Option<FormRecord> {
        self.last_record
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl FeedbackSubmitter for FixedSubmitter {
    fn submit(&self, record: FormRecord) -> BoxFuture<'static, SubmissionOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_record.lock() {
            *last = Some(record);
        }
        let outcome = self.outcome.clone();
        async move { outcome }.boxed()
    }
}

/// Builds a record from raw field values.
pub fn record_with(name: &str, email: &str, stars: u8, message: &str) -> FormRecord {
    let limits = FormLimits::default();
    let mut record = FormRecord::new();
    record.update(FieldUpdate::Name(name.to_string()), &limits);
    record.update(FieldUpdate::Email(email.to_string()), &limits);
    record.update(FieldUpdate::Message(message.to_string()), &limits);
    record.set_rating(stars);
    record
}

/// A record that passes validation.
pub fn complete_record() -> FormRecord {
    record_with("Ana", "ana@example.com", 4, "Great")
}

/// Returns `record` with an attachment of `size_bytes` at a fake path.
pub fn with_attachment(mut record: FormRecord, size_bytes: u64) -> FormRecord {
    record.update(
        FieldUpdate::File(Some(Attachment::new("/tmp/attachment.bin", size_bytes))),
        &FormLimits::default(),
    );
    record
}
