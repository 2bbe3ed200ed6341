// SPDX-License-Identifier: MPL-2.0
//! Result reported by a submission backend.

/// What the backend said about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String },
    Failure { message: String },
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Text to show the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_message() {
        let ok = SubmissionOutcome::success("Feedback submitted!");
        assert!(ok.is_success());
        assert_eq!(ok.message(), "Feedback submitted!");

        let failed = SubmissionOutcome::failure("Failed to submit feedback!");
        assert!(!failed.is_success());
        assert_eq!(failed.message(), "Failed to submit feedback!");
    }
}
