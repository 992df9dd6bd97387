//! Colour palettes for the two MindWell skins.
//!
//! Both skins render the same widgets in the same places; only colours and
//! border shapes differ.

use std::str::FromStr;

use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::models::MoodBand;

/// Mood band colours, shared by both skins.
pub const COLOR_MOOD_VERY_LOW: Color = Color::Rgb(239, 68, 68);
pub const COLOR_MOOD_LOW: Color = Color::Rgb(249, 115, 22);
pub const COLOR_MOOD_NEUTRAL: Color = Color::Rgb(234, 179, 8);
pub const COLOR_MOOD_GOOD: Color = Color::Rgb(34, 197, 94);
pub const COLOR_MOOD_GREAT: Color = Color::Rgb(59, 130, 246);

/// Crisis banner red
pub const COLOR_CRISIS: Color = Color::Rgb(220, 38, 38);

/// Colour for a mood band.
pub fn band_color(band: MoodBand) -> Color {
    match band {
        MoodBand::VeryLow => COLOR_MOOD_VERY_LOW,
        MoodBand::Low => COLOR_MOOD_LOW,
        MoodBand::Neutral => COLOR_MOOD_NEUTRAL,
        MoodBand::Good => COLOR_MOOD_GOOD,
        MoodBand::Great => COLOR_MOOD_GREAT,
    }
}

/// Visual skin selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Flat,
    Glass,
}

impl Skin {
    pub fn name(self) -> &'static str {
        match self {
            Skin::Flat => "flat",
            Skin::Glass => "glass",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Skin::Flat => Palette::FLAT,
            Skin::Glass => Palette::GLASS,
        }
    }
}

impl FromStr for Skin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Skin::Flat),
            "glass" => Ok(Skin::Glass),
            other => Err(format!("unknown skin '{}' (expected flat or glass)", other)),
        }
    }
}

impl std::fmt::Display for Skin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Colours used by every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub user_message: Color,
    pub assistant_message: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    /// Solid indigo-on-dark look.
    pub const FLAT: Palette = Palette {
        border: Color::DarkGray,
        border_focused: Color::Rgb(99, 102, 241),
        border_type: BorderType::Plain,
        title: Color::White,
        text: Color::Gray,
        dim: Color::DarkGray,
        accent: Color::Rgb(99, 102, 241),
        user_message: Color::Rgb(129, 140, 248),
        assistant_message: Color::Gray,
        highlight_bg: Color::Rgb(49, 46, 129),
        success: COLOR_MOOD_GOOD,
        error: COLOR_CRISIS,
    };

    /// Translucent purple look with rounded borders.
    pub const GLASS: Palette = Palette {
        border: Color::Rgb(148, 130, 201),
        border_focused: Color::Rgb(216, 180, 254),
        border_type: BorderType::Rounded,
        title: Color::Rgb(243, 232, 255),
        text: Color::Rgb(226, 232, 240),
        dim: Color::Rgb(148, 163, 184),
        accent: Color::Rgb(192, 132, 252),
        user_message: Color::Rgb(216, 180, 254),
        assistant_message: Color::Rgb(226, 232, 240),
        highlight_bg: Color::Rgb(88, 28, 135),
        success: Color::Rgb(134, 239, 172),
        error: Color::Rgb(252, 165, 165),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Palette::FLAT
    }
}
