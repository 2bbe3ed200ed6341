// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::feedback_form;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(feedback_form::Message),
    Notification(notifications::NotificationMessage),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FEEDBACK_FORM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override; wins over `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
}
