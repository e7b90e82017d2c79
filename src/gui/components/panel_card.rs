//! Panel card component
//!
//! One grid slot: a dark playback-frame placeholder carrying the resolved
//! embed address, with remove and open-in-browser actions. An empty embed
//! address renders a loading placeholder instead of a frame.

use crate::gui::app::Message;
use crate::panel::{Panel, PanelKind};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Create one panel card for the grid.
pub fn panel_card(
    panel: &Panel,
    kind: PanelKind,
    embed_address: &str,
    show_remove: bool,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let frame_height = match kind {
        PanelKind::Browser => 240.0,
        PanelKind::Shorts => 420.0,
    };

    let frame_content: Element<'static, Message> = if embed_address.is_empty() {
        text("Loading...")
            .size(14)
            .style(iced::theme::Text::Color(theme::GRAY_400))
            .into()
    } else {
        column![
            text("▶").size(36),
            text(embed_address.to_string())
                .size(12)
                .style(iced::theme::Text::Color(theme::GRAY_400)),
        ]
        .spacing(10)
        .align_items(Alignment::Center)
        .into()
    };

    let frame = container(frame_content)
        .width(Length::Fill)
        .height(Length::Fixed(frame_height))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            theme::PlaybackFrame,
        )));

    let mut header = row![Space::with_width(Length::Fill)]
        .spacing(8)
        .align_items(Alignment::Center);
    if show_remove {
        header = header.push(
            button(text("Remove").size(12))
                .on_press(Message::RemovePanel(panel.id))
                .padding([4, 8])
                .style(iced::theme::Button::Custom(Box::new(theme::RemoveButton))),
        );
    }

    let footer = row![
        text(panel.reference.clone())
            .size(12)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        Space::with_width(Length::Fill),
        button(text("Open").size(12))
            .on_press(Message::OpenInBrowser(panel.id))
            .padding([4, 10])
            .style(iced::theme::Button::Custom(Box::new(
                theme::SecondaryButton
            ))),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    container(column![header, frame, footer].spacing(8))
        .padding(12)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::PanelCardContainer,
        )))
        .into()
}
