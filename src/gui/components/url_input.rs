//! Video reference input component

use crate::gui::app::Message;
use iced::widget::{button, column, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Create the video reference input with paste/clear buttons and an
/// optional advisory line shown when the input matches no known shape.
pub fn url_input(
    value: &str,
    on_change: impl Fn(String) -> Message + 'static,
    on_paste: Message,
    on_clear: Message,
    advisory: Option<&str>,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let input_row = row![
        text_input("YouTube URL or ID", value)
            .on_input(on_change)
            .padding(12)
            .width(Length::Fill)
            .style(if advisory.is_some() {
                iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
            } else {
                iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
            }),
        tooltip(
            button(text("Paste").size(14))
                .on_press(on_paste)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(on_clear)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    if let Some(message) = advisory {
        column![
            input_row,
            text(message.to_string())
                .size(13)
                .style(iced::theme::Text::Color(theme::WARNING)),
        ]
        .spacing(6)
        .into()
    } else {
        input_row.into()
    }
}
