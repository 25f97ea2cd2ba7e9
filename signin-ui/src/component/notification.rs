use std::fmt::Display;

use crate::{component::text, theme, widget::*};
use iced::Length;

/// Error banner, used for messages that need the user's attention.
pub fn alert<'a, T: 'a>(message: impl Display) -> Container<'a, T> {
    Container::new(text::p2_medium(message).style(theme::text::error))
        .padding(10)
        .style(theme::notification::error)
        .width(Length::Fill)
}

pub fn success<'a, T: 'a>(message: impl Display) -> Container<'a, T> {
    Container::new(text::p2_medium(message))
        .padding(10)
        .style(theme::notification::success)
        .width(Length::Fill)
}
