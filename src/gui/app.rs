//! Main GUI application

use crate::downloader::DownloaderState;
use crate::gui::clipboard;
use crate::normalizer;
use crate::panel::{PanelGrid, PanelKind};
use crate::utils::config::AppSettings;
use crate::utils::error::MultiviewError;
use iced::{Application, Command, Element, Theme};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

/// Main application state
pub struct MultiviewApp {
    settings: AppSettings,
    current_tab: Tab,

    // Panel grid (shared by browser and shorts tabs)
    grid: PanelGrid,
    panel_count_input: String,
    reference_input: String,
    reference_advisory: Option<String>,
    status_message: String,

    // Downloader stub
    downloader: DownloaderState,
}

/// Top-level tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Browser,
    Shorts,
    Downloader,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Browser, Tab::Shorts, Tab::Downloader];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Browser => "Browser",
            Tab::Shorts => "Shorts",
            Tab::Downloader => "Downloader",
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Tab navigation
    TabSelected(Tab),

    // Start bar
    PanelCountChanged(String),
    ReferenceChanged(String),
    PasteReference,
    ClearReference,
    StartWatching,

    // Panel actions
    RemovePanel(Uuid),
    OpenInBrowser(Uuid),

    // Downloader stub
    DownloaderPlatformPicked(crate::downloader::Platform),
    DownloaderUrlChanged(String),
    DownloaderUsernameChanged(String),
    DownloadUrlPressed,
    DownloadUsernamePressed,
    DownloaderFinished(Uuid),
}

impl Application for MultiviewApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Message>) {
        let settings = AppSettings::load();

        let app = Self {
            grid: PanelGrid::new(settings.panel_cap),
            panel_count_input: settings.default_panel_count.to_string(),
            reference_input: String::new(),
            reference_advisory: None,
            status_message: "Ready".to_string(),
            current_tab: settings.default_tab,
            downloader: DownloaderState::default(),
            settings,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Multiview - Multi-Panel YouTube Viewer")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.current_tab = tab;
                if self.settings.default_tab != tab {
                    self.settings.default_tab = tab;
                    self.settings.save();
                }
                Command::none()
            }

            Message::PanelCountChanged(value) => {
                self.panel_count_input = value;
                Command::none()
            }

            Message::ReferenceChanged(value) => {
                self.reference_input = value;
                self.reference_advisory = None; // Clear advisory when user types
                Command::none()
            }

            Message::PasteReference => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => {
                        self.reference_input = content;
                        self.reference_advisory = None;
                        self.status_message = "URL pasted from clipboard".to_string();
                    }
                    Err(e) => {
                        self.status_message = e.to_string();
                    }
                }
                Command::none()
            }

            Message::ClearReference => {
                self.reference_input.clear();
                self.reference_advisory = None;
                Command::none()
            }

            Message::StartWatching => {
                let created = self.grid.start(&self.panel_count_input, &self.reference_input);
                if created > 0 {
                    // Advisory only; unrecognized input still renders and is
                    // left for the embed provider to reject.
                    let trimmed = self.reference_input.trim();
                    self.reference_advisory =
                        if normalizer::extract_video_id(trimmed).is_none() {
                            Some(
                                MultiviewError::UnrecognizedReference(trimmed.to_string())
                                    .to_string(),
                            )
                        } else {
                            None
                        };
                    self.status_message = format!(
                        "Watching {} panel{}",
                        created,
                        if created == 1 { "" } else { "s" }
                    );
                } else {
                    self.status_message =
                        "Enter a positive panel count and a video URL or ID".to_string();
                }
                Command::none()
            }

            Message::RemovePanel(id) => {
                if !self.grid.remove(id) {
                    self.status_message = "The last panel can't be removed".to_string();
                }
                Command::none()
            }

            Message::OpenInBrowser(id) => {
                if let Some(panel) = self.grid.panels().iter().find(|p| p.id == id) {
                    let address = normalizer::embed_address_with_flags(
                        &panel.reference,
                        &self.settings.player,
                    );
                    if !address.is_empty() {
                        if let Err(e) = open::that(&address) {
                            warn!(error = %e, "failed to open embed address");
                            self.status_message =
                                MultiviewError::BrowserError(e.to_string()).to_string();
                        }
                    }
                }
                Command::none()
            }

            Message::DownloaderPlatformPicked(platform) => {
                self.downloader.platform = platform;
                Command::none()
            }

            Message::DownloaderUrlChanged(value) => {
                self.downloader.url_input = value;
                Command::none()
            }

            Message::DownloaderUsernameChanged(value) => {
                self.downloader.username_input = value;
                Command::none()
            }

            Message::DownloadUrlPressed => match self.downloader.submit_url() {
                Some(request) => schedule_completion(request.id, request.simulated_delay_ms()),
                None => Command::none(),
            },

            Message::DownloadUsernamePressed => match self.downloader.submit_username() {
                Some(request) => schedule_completion(request.id, request.simulated_delay_ms()),
                None => Command::none(),
            },

            Message::DownloaderFinished(id) => {
                self.downloader.finish(id);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::theme;
        use crate::gui::views::{downloader_view, grid_view};
        use iced::widget::{button, column, container, row, text, Space};
        use iced::{Alignment, Length};

        // Header with brand badge, title, and tab switcher
        let mut tabs = row![].spacing(8);
        for tab in Tab::ALL {
            let style = if tab == self.current_tab {
                theme::TabButton::Active
            } else {
                theme::TabButton::Inactive
            };
            tabs = tabs.push(
                button(text(tab.label()).size(14))
                    .on_press(Message::TabSelected(tab))
                    .padding([8, 14])
                    .style(iced::theme::Button::Custom(Box::new(style))),
            );
        }

        let header = container(
            row![
                container(text("▶").size(20))
                    .padding([6, 12])
                    .style(iced::theme::Container::Custom(Box::new(theme::BrandBadge))),
                column![
                    text("Multiview").size(18).style(theme::TEXT_PRIMARY),
                    text("Watch multiple videos simultaneously")
                        .size(12)
                        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
                ]
                .spacing(2),
                Space::with_width(Length::Fill),
                tabs,
            ]
            .spacing(14)
            .align_items(Alignment::Center)
            .padding([12, 24]),
        )
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::HeaderContainer,
        )));

        let content: Element<'_, Message> = match self.current_tab {
            Tab::Browser | Tab::Shorts => {
                let kind = if self.current_tab == Tab::Browser {
                    PanelKind::Browser
                } else {
                    PanelKind::Shorts
                };
                grid_view(
                    &self.grid,
                    kind,
                    &self.settings.player,
                    &self.panel_count_input,
                    &self.reference_input,
                    self.reference_advisory.as_deref(),
                    &self.status_message,
                )
            }
            Tab::Downloader => downloader_view(&self.downloader),
        };

        let layout = column![
            header,
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24),
        ];

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer,
            )))
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

/// Schedule the simulated completion of a stub download request.
fn schedule_completion(id: Uuid, delay_ms: u64) -> Command<Message> {
    Command::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            id
        },
        Message::DownloaderFinished,
    )
}
