// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core feedback types and business rules.
//!
//! Nothing here touches the UI or performs I/O, so every rule can be tested
//! in isolation.
//!
//! # Modules
//!
//! - [`feedback`]: Form record types ([`FormRecord`](feedback::FormRecord),
//!   [`Rating`](feedback::Rating), [`Attachment`](feedback::Attachment)),
//!   submit-time [`validate`](feedback::validate) and
//!   [`SubmissionOutcome`](feedback::SubmissionOutcome)

pub mod feedback;
