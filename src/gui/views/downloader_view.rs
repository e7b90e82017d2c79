//! Downloader stub view
//!
//! Platform selector plus the two stub forms (single URL, bulk by
//! username) and the session request log.

use crate::downloader::{DownloaderState, Platform, RequestTarget};
use crate::gui::app::Message;
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

/// Create the downloader stub view.
pub fn downloader_view(state: &DownloaderState) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut platform_row = row![].spacing(10);
    for platform in Platform::ALL {
        let style = if platform == state.platform {
            theme::TabButton::Active
        } else {
            theme::TabButton::Inactive
        };
        platform_row = platform_row.push(
            button(text(platform.label()).size(14))
                .on_press(Message::DownloaderPlatformPicked(platform))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(style))),
        );
    }

    let url_section = column![
        text("Single Video URL")
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text_input(
            &format!("Paste {} video URL here...", state.platform),
            &state.url_input,
        )
        .on_input(Message::DownloaderUrlChanged)
        .padding(12)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
        button(text("Download Video").size(15))
            .on_press(Message::DownloadUrlPressed)
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(8);

    let username_section = column![
        text("Bulk Download by Username")
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text_input(
            &format!("Enter {} username...", state.platform),
            &state.username_input,
        )
        .on_input(Message::DownloaderUsernameChanged)
        .padding(12)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
        button(text("Download All Videos").size(15))
            .on_press(Message::DownloadUsernamePressed)
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(8);

    let status_line: Element<'static, Message> = if state.status.is_empty() {
        Space::with_height(0).into()
    } else {
        text(state.status.clone())
            .size(14)
            .style(iced::theme::Text::Color(theme::ACCENT))
            .into()
    };

    let mut log = column![].spacing(6);
    if !state.requests.is_empty() {
        log = log.push(
            text("Requests this session")
                .size(14)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        );
        for request in state.requests.iter().rev() {
            let target = match &request.target {
                RequestTarget::Url(url) => url.clone(),
                RequestTarget::Username(user) => format!("@{} (all videos)", user),
            };
            let mark = if request.completed { "done" } else { "pending" };
            log = log.push(
                row![
                    text(request.submitted_at.format("%H:%M:%S").to_string())
                        .size(12)
                        .style(iced::theme::Text::Color(theme::GRAY_500)),
                    text(request.platform.label())
                        .size(12)
                        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
                    text(target)
                        .size(12)
                        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
                    Space::with_width(Length::Fill),
                    text(mark).size(12).style(iced::theme::Text::Color(
                        if request.completed {
                            theme::SUCCESS
                        } else {
                            theme::WARNING
                        }
                    )),
                ]
                .spacing(12)
                .align_items(Alignment::Center),
            );
        }
    }

    container(
        column![
            text("Social Video Downloader")
                .size(22)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            platform_row,
            url_section,
            username_section,
            status_line,
            log,
        ]
        .spacing(20),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )))
    .into()
}
