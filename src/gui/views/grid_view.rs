//! Grid view: the responsive wall of player panels
//!
//! Shared by the browser and shorts tabs; the only difference is the
//! panel aspect handed down to the card.

use crate::gui::app::Message;
use crate::gui::components::{panel_card, url_input};
use crate::normalizer::{self, PlayerFlags};
use crate::panel::{PanelGrid, PanelKind};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Row, Space};
use iced::{Alignment, Element, Length};

/// Create the grid view, including the start bar on top.
#[allow(clippy::too_many_arguments)]
pub fn grid_view(
    grid: &PanelGrid,
    kind: PanelKind,
    flags: &PlayerFlags,
    panel_count_value: &str,
    reference_value: &str,
    reference_advisory: Option<&str>,
    status_message: &str,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let start_bar = container(
        column![
            row![
                text_input("Number of panels", panel_count_value)
                    .on_input(Message::PanelCountChanged)
                    .padding(12)
                    .width(Length::Fixed(160.0))
                    .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
                url_input(
                    reference_value,
                    Message::ReferenceChanged,
                    Message::PasteReference,
                    Message::ClearReference,
                    reference_advisory,
                ),
                button(text("Start Watching").size(15))
                    .on_press_maybe(if reference_value.trim().is_empty() {
                        None
                    } else {
                        Some(Message::StartWatching)
                    })
                    .padding([12, 24])
                    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
            text(status_message.to_string())
                .size(13)
                .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )));

    let grid_section: Element<'static, Message> = if grid.is_empty() {
        container(
            column![
                text("No panels yet")
                    .size(16)
                    .style(iced::theme::Text::Color(theme::GRAY_500)),
                text("Paste a YouTube URL or ID and press Start Watching")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::GRAY_400)),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    } else {
        let columns = grid.columns();
        let show_remove = grid.can_remove();

        let mut rows = column![].spacing(16);
        for chunk in grid.panels().chunks(columns) {
            let mut grid_row: Row<'static, Message> = row![].spacing(16);
            for panel in chunk {
                let embed = normalizer::embed_address_with_flags(&panel.reference, flags);
                grid_row = grid_row.push(panel_card(panel, kind, &embed, show_remove));
            }
            // Pad the trailing row so cards keep a uniform width.
            for _ in chunk.len()..columns {
                grid_row = grid_row.push(Space::with_width(Length::Fill));
            }
            rows = rows.push(grid_row);
        }

        scrollable(rows)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Scrollable::Custom(Box::new(
                theme::ScrollableStyle,
            )))
            .into()
    };

    column![start_bar, grid_section]
        .spacing(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
