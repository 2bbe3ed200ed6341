// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`submission`]: Delivery of a feedback record to a backend
//!
//! # Example
//!
//! ```ignore
//! use feedback_form::application::port::FeedbackSubmitter;
//! use feedback_form::domain::feedback::FormRecord;
//!
//! async fn send(submitter: &dyn FeedbackSubmitter, record: FormRecord) -> bool {
//!     submitter.submit(record).await.is_success()
//! }
//! ```

pub mod submission;

pub use submission::FeedbackSubmitter;
