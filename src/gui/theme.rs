//! Custom theme definitions for the application - Light Theme

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Light Color Palette ---

// Background gradients - soft blue to indigo
pub const BACKGROUND_START: Color = Color::from_rgb(0.976, 0.980, 0.984); // Slate 50
pub const BACKGROUND_MID: Color = Color::from_rgb(0.941, 0.976, 1.0); // Blue 50
pub const BACKGROUND_END: Color = Color::from_rgb(0.878, 0.906, 1.0); // Indigo 100

// Primary colors - Blue
pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // Primary actions
pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Hover state
pub const BLUE_100: Color = Color::from_rgb(0.859, 0.918, 1.0); // Subtle backgrounds

// Brand colors - Red (video badge)
pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Danger state

// Gray scale for text and borders
pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Primary text
pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // Secondary text
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // Tertiary text
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // Disabled text
pub const GRAY_400: Color = Color::from_rgb(0.616, 0.639, 0.667); // Placeholder
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // Light borders
pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // Very light bg
pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // Lightest bg

// Near-black for the playback frame slot
pub const FRAME_FILL: Color = Color::from_rgb(0.059, 0.059, 0.078);

// White with alpha for glass effects
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const WHITE_70: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7); // Light glass
pub const WHITE_85: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.85); // Strong glass

// Text colors for compatibility
pub const TEXT_PRIMARY: Color = GRAY_800;
pub const TEXT_SECONDARY: Color = GRAY_600;

// Status colors
pub const ACCENT: Color = BLUE_600;
pub const SUCCESS: Color = Color::from_rgb(0.063, 0.725, 0.506); // Emerald
pub const WARNING: Color = Color::from_rgb(0.961, 0.620, 0.094); // Amber

// --- Container Styles ---

pub struct MainGradientContainer;

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(0.5, BACKGROUND_MID)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

/// Sticky header bar at the top of the window.
pub struct HeaderContainer;

impl container::StyleSheet for HeaderContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_700),
            background: Some(Background::Color(WHITE_70)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
        }
    }
}

/// Red brand badge next to the app title.
pub struct BrandBadge;

impl container::StyleSheet for BrandBadge {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356))
                    .add_stop(0.0, RED_500)
                    .add_stop(1.0, RED_600),
            ))),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub struct GlassContainer;

impl container::StyleSheet for GlassContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(WHITE_85)),
            border: Border {
                color: GRAY_200,
                width: 2.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.145, 0.388, 0.922, 0.12),
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
        }
    }
}

/// White card wrapping a single panel in the grid.
pub struct PanelCardContainer;

impl container::StyleSheet for PanelCardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

/// Dark slot standing in for the playback frame itself.
pub struct PlaybackFrame;

impl container::StyleSheet for PlaybackFrame {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_400),
            background: Some(Background::Color(FRAME_FILL)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(BLUE_600)),
            text_color: WHITE,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.145, 0.388, 0.922, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(BLUE_500)),
            ..active
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
                ..active.shadow
            },
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(WHITE)),
            text_color: GRAY_700,
            border: Border {
                radius: 10.0.into(),
                color: GRAY_200,
                width: 1.0,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 4.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(GRAY_50)),
            ..active
        }
    }
}

/// Header tab buttons (Browser / Shorts / Downloader).
pub enum TabButton {
    Active,
    Inactive,
}

impl button::StyleSheet for TabButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => button::Appearance {
                background: Some(Background::Color(BLUE_600)),
                text_color: WHITE,
                border: Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Inactive => button::Appearance {
                background: Some(Background::Color(WHITE)),
                text_color: GRAY_700,
                border: Border {
                    radius: 10.0.into(),
                    color: GRAY_200,
                    width: 1.0,
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => self.active(style),
            Self::Inactive => button::Appearance {
                background: Some(Background::Color(BLUE_100)),
                ..self.active(style)
            },
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_600,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: GRAY_800,
            background: Some(Background::Color(GRAY_200)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Small red "Remove" badge on each panel card.
pub struct RemoveButton;

impl button::StyleSheet for RemoveButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_500)),
            text_color: WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_600)),
            text_color: WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 10.0.into(),
                width: 1.0,
                color: GRAY_200,
            },
            icon_color: GRAY_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: BLUE_500,
                width: 2.0,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.145, 0.388, 0.922, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(GRAY_100),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }
}

pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 10.0.into(),
                width: 2.0,
                color: RED_500,
            },
            icon_color: RED_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.937, 0.267, 0.267, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(GRAY_100),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.145, 0.388, 0.922, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.145, 0.388, 0.922, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}
