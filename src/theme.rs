//! Color palette passed explicitly into rendering.
//!
//! A [`Palette`] maps each [`ColorRole`] to a concrete terminal color. It is
//! built once from the configured [`ThemeMode`] plus any per-role overrides
//! and handed to the view projection, so nothing reads theme state ambiently.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::color::parse_hex_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// What a color is used for on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Page background
    Background,
    /// Sidebar and toolbar surfaces
    Surface,
    /// Primary text
    Text,
    /// Secondary text (subtitles, dates, out-of-month days)
    Muted,
    /// Header subtitle, focused borders
    Accent,
    /// Event chips and sidebar rows
    Event,
    /// Text drawn on top of `Event`
    EventText,
    /// Range selection highlight
    Selection,
    /// Today's cell
    Today,
    /// Grid lines
    Border,
    /// Destructive confirmations
    Danger,
}

impl ColorRole {
    pub const ALL: [ColorRole; 11] = [
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Text,
        ColorRole::Muted,
        ColorRole::Accent,
        ColorRole::Event,
        ColorRole::EventText,
        ColorRole::Selection,
        ColorRole::Today,
        ColorRole::Border,
        ColorRole::Danger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::Text => "text",
            ColorRole::Muted => "muted",
            ColorRole::Accent => "accent",
            ColorRole::Event => "event",
            ColorRole::EventText => "event_text",
            ColorRole::Selection => "selection",
            ColorRole::Today => "today",
            ColorRole::Border => "border",
            ColorRole::Danger => "danger",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| format!("unknown color role '{}'", s))
    }
}

/// Role → color mapping used by every rendering function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<ColorRole, Color>,
}

impl Palette {
    /// Built-in palette for a light/dark mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        let pairs: [(ColorRole, Color); 11] = match mode {
            ThemeMode::Dark => [
                (ColorRole::Background, Color::Rgb(20, 27, 45)),
                (ColorRole::Surface, Color::Rgb(31, 42, 64)),
                (ColorRole::Text, Color::Rgb(224, 224, 224)),
                (ColorRole::Muted, Color::Rgb(133, 133, 133)),
                (ColorRole::Accent, Color::Rgb(112, 216, 189)),
                (ColorRole::Event, Color::Rgb(76, 206, 172)),
                (ColorRole::EventText, Color::Rgb(20, 27, 45)),
                (ColorRole::Selection, Color::Rgb(62, 67, 150)),
                (ColorRole::Today, Color::Rgb(104, 112, 250)),
                (ColorRole::Border, Color::Rgb(61, 61, 61)),
                (ColorRole::Danger, Color::Rgb(219, 79, 74)),
            ],
            ThemeMode::Light => [
                (ColorRole::Background, Color::Rgb(252, 252, 252)),
                (ColorRole::Surface, Color::Rgb(242, 240, 240)),
                (ColorRole::Text, Color::Rgb(20, 20, 20)),
                (ColorRole::Muted, Color::Rgb(102, 102, 102)),
                (ColorRole::Accent, Color::Rgb(61, 165, 138)),
                (ColorRole::Event, Color::Rgb(76, 206, 172)),
                (ColorRole::EventText, Color::Rgb(20, 20, 20)),
                (ColorRole::Selection, Color::Rgb(164, 169, 252)),
                (ColorRole::Today, Color::Rgb(83, 90, 200)),
                (ColorRole::Border, Color::Rgb(194, 194, 194)),
                (ColorRole::Danger, Color::Rgb(219, 79, 74)),
            ],
        };
        Self {
            colors: pairs.into_iter().collect(),
        }
    }

    /// Built-in palette with `overrides` (role name → `#rrggbb`) applied on top.
    ///
    /// Unknown roles and malformed colors are skipped; [`crate::config::Config::validate`]
    /// rejects them before this is reached.
    pub fn with_overrides(mode: ThemeMode, overrides: &HashMap<String, String>) -> Self {
        let mut palette = Self::for_mode(mode);
        for (role, hex) in overrides {
            match (role.parse::<ColorRole>(), parse_hex_color(hex)) {
                (Ok(role), Some(color)) => palette.set(role, color),
                _ => log::warn!("Ignoring palette override {} = {}", role, hex),
            }
        }
        palette
    }

    pub fn set(&mut self, role: ColorRole, color: Color) {
        self.colors.insert(role, color);
    }

    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(&role).copied().unwrap_or(Color::Reset)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}
