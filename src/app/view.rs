// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shell is a static heading above the feedback form, with the toast
//! overlay stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::feedback_form::{self, State as FormState};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
    pub notifications: &'a Manager,
}

/// Renders the heading, the form and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("app-heading")).size(typography::TITLE_LG);

    let form = ctx
        .form
        .view(feedback_form::ViewEnv { i18n: ctx.i18n })
        .map(Message::Form);

    let column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(form);

    let page = Container::new(scrollable(column))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}
