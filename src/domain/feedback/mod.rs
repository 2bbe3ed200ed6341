// SPDX-License-Identifier: MPL-2.0
//! Feedback form data: the record, its rating, validation and submission outcome.

mod outcome;
mod rating;
mod record;
mod validation;

pub use outcome::SubmissionOutcome;
pub use rating::{Rating, MAX_STARS};
pub use record::{format_size, Attachment, FieldUpdate, FormLimits, FormRecord};
pub use validation::{is_valid_email, validate, Field, FieldError, ValidationErrors};
