//! Chart color tokens.
//!
//! Two palettes:
//! - **Classic**: plain terminal colors (green/red candles, dark cyan price
//!   axis, dark blue volume) that read well on any background
//! - **Parrot/neon**: neon accents on a deep charcoal background
//!
//! Widgets only receive `Style` values built from these tokens; nothing else
//! about color is managed here.

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

/// Palette selector, as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Classic,
    ParrotNeon,
}

/// Colors used by the chart widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Candles that closed at or above their open
    pub positive: Color,
    /// Candles that closed below their open
    pub negative: Color,
    /// Price axis labels
    pub price_axis: Color,
    /// Volume axis labels
    pub volume_axis: Color,
    /// Volume bars
    pub volume: Color,
    /// Highlighted axis value (newest close/volume)
    pub highlight: Color,
    /// Chart frame and title
    pub border: Color,
    /// Background behind the frame
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Classic => Self::classic(),
            ThemeName::ParrotNeon => Self::parrot_neon(),
        }
    }
}

impl Theme {
    /// Terminal palette colors; respects the user's terminal scheme.
    pub fn classic() -> Self {
        Self {
            positive: Color::Green,
            negative: Color::Red,
            price_axis: Color::Cyan,
            volume_axis: Color::Blue,
            volume: Color::Blue,
            highlight: Color::Reset,
            border: Color::Reset,
            background: Color::Reset,
        }
    }

    /// Neon accents on a near-black surface.
    pub fn parrot_neon() -> Self {
        Self {
            // Neon green / hot pink
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),

            // Electric cyan / cool purple
            price_axis: Color::Rgb(0, 255, 255),
            volume_axis: Color::Rgb(147, 112, 219),

            // Steel blue
            volume: Color::Rgb(100, 149, 237),

            highlight: Color::White,
            border: Color::Rgb(0, 255, 255),
            background: Color::Rgb(18, 18, 20),
        }
    }

    /// Style for a candle body/wick.
    pub fn candle(&self, positive: bool) -> Style {
        if positive {
            Style::default().fg(self.positive)
        } else {
            Style::default().fg(self.negative)
        }
    }

    pub fn price_axis(&self) -> Style {
        Style::default().fg(self.price_axis)
    }

    pub fn volume_axis(&self) -> Style {
        Style::default().fg(self.volume_axis)
    }

    pub fn volume(&self) -> Style {
        Style::default().fg(self.volume)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn background(&self) -> Style {
        Style::default().bg(self.background)
    }
}
