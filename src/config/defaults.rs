// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Form**: Message length cap and attachment size limit
//! - **Submission**: Simulated backend delay and success rate
//! - **Notifications**: Toast display window

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Maximum number of characters accepted in the message field.
pub const DEFAULT_MESSAGE_MAX_CHARS: usize = 500;

/// Upper bound for a configured message cap.
pub const MAX_MESSAGE_MAX_CHARS: usize = 10_000;

/// One mebibyte, in bytes.
pub const MIB: u64 = 1024 * 1024;

/// Maximum attachment size accepted by validation (2 MiB).
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 2 * MIB;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Delay before the simulated backend answers (in milliseconds).
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1000;

/// Longest delay the simulated backend may be configured with (in milliseconds).
pub const MAX_SUBMISSION_DELAY_MS: u64 = 30_000;

/// Probability that the simulated backend accepts a submission.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.7;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long an outcome notice stays on screen (in seconds).
pub const DEFAULT_NOTICE_DISPLAY_SECS: u64 = 3;

/// Minimum notice display window (in seconds).
pub const MIN_NOTICE_DISPLAY_SECS: u64 = 1;

/// Maximum notice display window (in seconds).
pub const MAX_NOTICE_DISPLAY_SECS: u64 = 30;

/// Display window for startup warnings (in seconds).
pub const WARNING_DISPLAY_SECS: u64 = 5;
