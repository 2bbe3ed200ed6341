// SPDX-License-Identifier: MPL-2.0
//! The feedback form record and its field updates.

use super::rating::Rating;
use crate::config::{FormConfig, DEFAULT_MAX_ATTACHMENT_BYTES, DEFAULT_MESSAGE_MAX_CHARS, MIB};
use std::path::{Path, PathBuf};

/// Input limits applied to a [`FormRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    /// Characters kept in the message field.
    pub message_max_chars: usize,
    /// Largest attachment that passes validation, in bytes.
    pub max_attachment_bytes: u64,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            message_max_chars: DEFAULT_MESSAGE_MAX_CHARS,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

impl From<&FormConfig> for FormLimits {
    fn from(config: &FormConfig) -> Self {
        Self {
            message_max_chars: config.message_max_chars(),
            max_attachment_bytes: config.max_attachment_bytes(),
        }
    }
}

/// A file chosen by the user. Only a reference is kept; the bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    path: PathBuf,
    file_name: String,
    size_bytes: u64,
}

impl Attachment {
    /// Creates an attachment reference for `path` with a known size.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            file_name,
            size_bytes,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Human-readable size, e.g. `"512 B"`, `"12.5 KB"`, `"2.0 MB"`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Formats a byte count with binary units.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// A replacement value for one text or file field of the record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Message(String),
    /// First selected file, or `None` when the selection was cleared.
    File(Option<Attachment>),
}

/// Everything the user has entered so far.
///
/// The record does not validate itself on update; see
/// [`validate`](super::validation::validate).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormRecord {
    name: String,
    email: String,
    rating: Rating,
    message: String,
    file: Option<Attachment>,
}

impl FormRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn file(&self) -> Option<&Attachment> {
        self.file.as_ref()
    }

    /// Number of characters in the message, as shown by the counter.
    #[must_use]
    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }

    /// Replaces one field. Messages longer than the limit are truncated.
    pub fn update(&mut self, update: FieldUpdate, limits: &FormLimits) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Email(email) => self.email = email,
            FieldUpdate::Message(message) => {
                self.message = truncate_chars(message, limits.message_max_chars);
            }
            FieldUpdate::File(file) => self.file = file,
        }
    }

    /// Sets the rating to the clicked star.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = Rating::new(stars);
    }
}

fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
    }
    text
}
