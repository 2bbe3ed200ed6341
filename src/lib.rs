// SPDX-License-Identifier: MPL-2.0
//! `feedback_form` is a small feedback and rating form built with the Iced GUI
//! framework.
//!
//! It collects a name, an email, a 1-5 star rating, a free-text message and
//! an optional attachment, validates them on submit and hands the record to a
//! simulated backend. The outcome is reported as a toast that clears itself.
//!
//! # Layers
//!
//! - [`domain`]: Form record, rating and validation rules
//! - [`application`]: The [`FeedbackSubmitter`](application::port::FeedbackSubmitter) port
//! - [`infrastructure`]: Simulated backend and attachment inspection
//! - [`ui`] and [`app`]: Iced widgets and the application shell

#![doc(html_root_url = "https://docs.rs/feedback_form/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
