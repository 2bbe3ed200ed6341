// SPDX-License-Identifier: MPL-2.0
//! Rendering of the feedback form and the thank-you screen.
//!
//! Everything shown here is derived from the component state on each call:
//! star highlighting, the character counter, the submit label and whether
//! the submit button is enabled.

use super::component::{Message, State};
use crate::domain::feedback::{Field, Rating};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_editor, text_input, Column, Row, Space};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Star glyph used for every rating position.
const STAR_GLYPH: &str = "★";

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let content = if state.is_submitted() {
        view_thank_you(state, env.i18n)
    } else {
        view_form(state, env.i18n)
    };

    container(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn view_thank_you<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let message = i18n.tr_with_args("form-thank-you", &[("name", state.record().name())]);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(text(message).size(typography::TITLE_MD))
        .push(
            button(text(i18n.tr("form-submit-another")).size(typography::BODY))
                .on_press(Message::Reset)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}

fn view_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let record = state.record();
    let errors = state.errors();
    let enter_submits = state.can_submit().then_some(Message::Submit);

    let name_input = text_input(&i18n.tr("form-name-placeholder"), record.name())
        .on_input(Message::NameChanged)
        .on_submit_maybe(enter_submits.clone())
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(styles::input::field(errors.contains(Field::Name)));

    let email_input = text_input(&i18n.tr("form-email-placeholder"), record.email())
        .on_input(Message::EmailChanged)
        .on_submit_maybe(enter_submits)
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(styles::input::field(errors.contains(Field::Email)));

    let message_editor = text_editor(state.message_editor())
        .placeholder(i18n.tr("form-message-placeholder"))
        .on_action(Message::MessageEdited)
        .height(Length::Fixed(sizing::MESSAGE_EDITOR_HEIGHT))
        .padding(spacing::XS)
        .size(typography::BODY);

    let counter = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            text(state.message_counter(i18n))
                .size(typography::CAPTION)
                .style(styles::container::muted_text),
        );

    let submit_button = button(
        text(i18n.tr(state.submit_label_key()))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe(state.can_submit().then_some(Message::Submit))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(labeled(i18n.tr("form-name-label"), name_input.into(), errors.message(Field::Name)))
        .push(labeled(
            i18n.tr("form-email-label"),
            email_input.into(),
            errors.message(Field::Email),
        ))
        .push(labeled(
            i18n.tr("form-rating-label"),
            view_stars(record.rating()),
            errors.message(Field::Rating),
        ))
        .push(labeled(
            i18n.tr("form-message-label"),
            Column::new()
                .spacing(spacing::XXS)
                .push(message_editor)
                .push(counter)
                .into(),
            None,
        ))
        .push(labeled(
            i18n.tr("form-file-label"),
            view_attachment(state, i18n),
            errors.message(Field::File),
        ))
        .push(submit_button)
        .into()
}

/// Five clickable stars; every position up to the rating is highlighted.
fn view_stars<'a>(rating: Rating) -> Element<'a, Message> {
    Rating::positions()
        .fold(Row::new().spacing(spacing::XXS), |row, position| {
            row.push(
                button(text(STAR_GLYPH).size(sizing::STAR))
                    .on_press(Message::StarSelected(position))
                    .padding(spacing::XXS)
                    .style(styles::button::star(rating.is_selected(position))),
            )
        })
        .into()
}

fn view_attachment<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let choose = button(text(i18n.tr("form-file-choose")).size(typography::BODY_SM))
        .on_press(Message::PickFile)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(choose);

    match state.record().file() {
        Some(file) => {
            row = row
                .push(text(file.file_name()).size(typography::BODY_SM))
                .push(
                    text(file.display_size())
                        .size(typography::CAPTION)
                        .style(styles::container::muted_text),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    button(text(i18n.tr("form-file-remove")).size(typography::CAPTION))
                        .on_press(Message::ClearFile)
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::button::secondary),
                );
        }
        None => {
            row = row.push(
                text(i18n.tr("form-file-none"))
                    .size(typography::BODY_SM)
                    .style(styles::container::muted_text),
            );
        }
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(row)
        .push(
            text(i18n.tr("form-file-drop-hint"))
                .size(typography::CAPTION)
                .style(styles::container::muted_text),
        )
        .into()
}

/// Label above `field`, error message beneath it.
fn labeled<'a>(
    label: String,
    field: Element<'a, Message>,
    error: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(field);

    if let Some(error) = error {
        column = column.push(
            text(error)
                .size(typography::CAPTION)
                .style(styles::container::error_text),
        );
    }

    column.into()
}
