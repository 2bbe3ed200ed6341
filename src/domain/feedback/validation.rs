// SPDX-License-Identifier: MPL-2.0
//! Submit-time validation of a [`FormRecord`].
//!
//! Validation is deferred until the user submits: field updates never run it.
//! Each call builds a fresh [`ValidationErrors`] holding only the failing
//! fields, so results are never merged with a previous attempt.

use super::record::{format_size, FormLimits, FormRecord};
use crate::config::MIB;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Unanchored `local@domain.tld` check, matching the browser-side pattern.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Form fields that can carry a validation error, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Rating,
    File,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    InvalidEmail,
    RatingRequired,
    FileTooLarge { max_bytes: u64 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NameRequired => write!(f, "Name required"),
            FieldError::EmailRequired => write!(f, "Email required"),
            FieldError::InvalidEmail => write!(f, "Invalid email"),
            FieldError::RatingRequired => write!(f, "Rating required"),
            FieldError::FileTooLarge { max_bytes } if max_bytes % MIB == 0 => {
                write!(f, "File size must be < {}MB", max_bytes / MIB)
            }
            FieldError::FileTooLarge { max_bytes } => {
                write!(f, "File size must be < {}", format_size(*max_bytes))
            }
        }
    }
}

/// Field-to-error mapping. Absence of a key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    /// Returns true if every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Display message for a failing field.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// Failing fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// Returns true if `email` contains a `local@domain.tld` run of non-space text.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field of `record` and returns the failures.
#[must_use]
pub fn validate(record: &FormRecord, limits: &FormLimits) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if record.name().trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    if record.email().trim().is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_valid_email(record.email()) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    if record.rating().is_unset() {
        errors.insert(Field::Rating, FieldError::RatingRequired);
    }

    if let Some(file) = record.file() {
        if file.size_bytes() > limits.max_attachment_bytes {
            errors.insert(
                Field::File,
                FieldError::FileTooLarge {
                    max_bytes: limits.max_attachment_bytes,
                },
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::{Attachment, FieldUpdate};

    fn record(name: &str, email: &str, stars: u8) -> FormRecord {
        let limits = FormLimits::default();
        let mut record = FormRecord::new();
        record.update(FieldUpdate::Name(name.into()), &limits);
        record.update(FieldUpdate::Email(email.into()), &limits);
        record.set_rating(stars);
        record
    }

    fn with_file(mut record: FormRecord, size_bytes: u64) -> FormRecord {
        record.update(
            FieldUpdate::File(Some(Attachment::new("/tmp/upload.bin", size_bytes))),
            &FormLimits::default(),
        );
        record
    }

    #[test]
    fn empty_or_blank_name_is_required() {
        for name in ["", "   ", "\t\n"] {
            let errors = validate(&record(name, "a@b.co", 3), &FormLimits::default());
            assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
        }
    }

    #[test]
    fn blank_email_is_required_not_invalid() {
        let errors = validate(&record("Ana", "  ", 3), &FormLimits::default());
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email required"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["bad", "a@b", "@b.co", "a@.co", "a b@c", "a@b."] {
            assert!(!is_valid_email(email), "{email} should be invalid");
            let errors = validate(&record("Ana", email, 3), &FormLimits::default());
            assert_eq!(
                errors.get(Field::Email),
                Some(FieldError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn well_formed_emails_pass() {
        for email in ["a@b.co", "ana.lima@example.org", "x+y@sub.domain.io", " a@b.co "] {
            assert!(is_valid_email(email), "{email} should be valid");
            let errors = validate(&record("Ana", email, 3), &FormLimits::default());
            assert!(!errors.contains(Field::Email), "{email}");
        }
    }

    #[test]
    fn rating_zero_is_required_and_one_to_five_pass() {
        let errors = validate(&record("Ana", "a@b.co", 0), &FormLimits::default());
        assert_eq!(errors.message(Field::Rating).as_deref(), Some("Rating required"));

        for stars in 1..=5 {
            let errors = validate(&record("Ana", "a@b.co", stars), &FormLimits::default());
            assert!(!errors.contains(Field::Rating));
        }
    }

    #[test]
    fn file_limit_is_inclusive_of_two_mebibytes() {
        let limits = FormLimits::default();
        let base = record("Ana", "a@b.co", 5);

        assert!(validate(&base, &limits).is_empty());
        assert!(validate(&with_file(base.clone(), 0), &limits).is_empty());
        assert!(validate(&with_file(base.clone(), 2 * MIB), &limits).is_empty());

        let errors = validate(&with_file(base, 2 * MIB + 1), &limits);
        assert_eq!(
            errors.message(Field::File).as_deref(),
            Some("File size must be < 2MB")
        );
    }

    #[test]
    fn custom_file_limit_message_uses_readable_size() {
        let error = FieldError::FileTooLarge { max_bytes: 1536 };
        assert_eq!(error.to_string(), "File size must be < 1.5 KB");
    }

    #[test]
    fn invalid_form_reports_every_failing_field() {
        let errors = validate(&record("", "bad", 0), &FormLimits::default());

        let collected: Vec<(Field, String)> = errors
            .iter()
            .map(|(field, error)| (field, error.to_string()))
            .collect();
        assert_eq!(
            collected,
            vec![
                (Field::Name, "Name required".to_string()),
                (Field::Email, "Invalid email".to_string()),
                (Field::Rating, "Rating required".to_string()),
            ]
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let record = with_file(record(" ", "nope", 0), 3 * MIB);
        let limits = FormLimits::default();
        assert_eq!(validate(&record, &limits), validate(&record, &limits));
    }

    #[test]
    fn empty_record_fails_the_three_required_fields() {
        let errors = validate(&FormRecord::new(), &FormLimits::default());
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Email));
        assert!(errors.contains(Field::Rating));
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email required"));
    }
}
