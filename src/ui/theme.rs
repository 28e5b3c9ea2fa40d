//! Color palettes for the dark and light themes

use crate::state::Theme;
use ratatui::style::Color;

/// Colors used by every draw function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub muted: Color,
    pub text: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub dialog_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::Cyan,
                muted: Color::DarkGray,
                text: Color::White,
                error: Color::Red,
                success: Color::Green,
                warning: Color::Yellow,
                bar_bg: Color::DarkGray,
                bar_fg: Color::Gray,
                dialog_bg: Color::Black,
            },
            Theme::Light => Self {
                accent: Color::Blue,
                muted: Color::Gray,
                text: Color::Black,
                error: Color::Red,
                success: Color::Green,
                warning: Color::Magenta,
                bar_bg: Color::Gray,
                bar_fg: Color::Black,
                dialog_bg: Color::White,
            },
        }
    }
}
