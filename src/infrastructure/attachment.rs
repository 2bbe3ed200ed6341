// SPDX-License-Identifier: MPL-2.0
//! File selection and inspection for the attachment field.
//!
//! Only the file's metadata is read. Its contents never leave the disk.

use crate::domain::feedback::Attachment;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Opens the native file picker and returns the first selected file.
pub async fn pick_file(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(&title)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Reads the size of `path` and builds an [`Attachment`] reference.
///
/// Directories and other non-file entries are rejected.
pub async fn inspect(path: PathBuf) -> Result<Attachment> {
    let metadata = tokio::fs::metadata(&path).await?;
    if !metadata.is_file() {
        return Err(Error::Io(format!("not a regular file: {}", path.display())));
    }
    tracing::debug!(path = %path.display(), size = metadata.len(), "Inspected attachment");
    Ok(Attachment::new(path, metadata.len()))
}
