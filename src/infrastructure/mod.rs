// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the thin wrappers around system I/O the form needs.
//!
//! # Available Adapters
//!
//! - [`simulated`]: In-process backend (implements [`FeedbackSubmitter`])
//! - [`attachment`]: Native file picker and file-size inspection
//!
//! [`FeedbackSubmitter`]: crate::application::port::FeedbackSubmitter

pub mod attachment;
pub mod simulated;

pub use simulated::SimulatedBackend;
