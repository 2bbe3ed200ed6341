// SPDX-License-Identifier: MPL-2.0
//! Container and text styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{container, text};
use iced::{Background, Border, Color, Theme};

/// Card holding the form or the thank-you message.
///
/// The color is derived from the active Iced `Theme` background so the card
/// stays readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Toast surface with a severity-colored border.
pub fn toast(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Inline validation message beneath a field.
pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Secondary text (character counter, file size).
pub fn muted_text(theme: &Theme) -> text::Style {
    let base = theme.extended_palette().background.base.text;
    text::Style {
        color: Some(Color {
            a: opacity::MUTED,
            ..base
        }),
    }
}
