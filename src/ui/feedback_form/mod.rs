// SPDX-License-Identifier: MPL-2.0
//! Feedback form widget: name, email, star rating, message and attachment.

pub mod component;
mod view;

pub use component::{Event, Message, State};
pub use view::ViewEnv;

use iced::Element;

impl State {
    /// Renders the form, or the thank-you screen after a successful submit.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }
}
