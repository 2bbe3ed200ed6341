// SPDX-License-Identifier: MPL-2.0
//! Text input styles.
//!
//! Fields start from Iced's default look and only swap the border color when
//! the field failed validation. The message editor has no validation rule and
//! keeps Iced's default style.

use crate::ui::design_tokens::{border, palette};
use iced::widget::text_input;
use iced::Theme;

/// Single-line input, red-bordered when `has_error`.
pub fn field(has_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        if has_error {
            style.border.color = palette::ERROR_500;
            style.border.width = border::WIDTH_MD;
        }
        style
    }
}
