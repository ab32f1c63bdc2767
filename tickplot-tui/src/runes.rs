//! Glyph alphabets: fractional ramps for bars/ticks and the candle rune set.

use serde::{Deserialize, Serialize};
use tickplot_core::PlotError;

use crate::candles::CandleGlyph;

/// Default bar ramp: quarter-height steps, full block last.
pub const DEFAULT_BAR_RUNES: [char; 4] = ['▃', '▄', '▆', '█'];

/// Default tick ramp: five marks from the bottom to the top of a cell.
pub const DEFAULT_TICK_RUNES: [char; 5] = ['⎽', '⎼', '—', '⎻', '⎺'];

/// Ordered partial-fill glyphs simulating sub-cell resolution.
///
/// Never empty, so the resolution is at least 1 and the last glyph (the full
/// one) always exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self, PlotError> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return Err(PlotError::EmptyGlyphRamp);
        }
        Ok(Self { glyphs })
    }

    /// Parses a ramp from the characters of `s`.
    pub fn parse(s: &str) -> Result<Self, PlotError> {
        Self::new(s.chars())
    }

    pub fn bars() -> Self {
        Self {
            glyphs: DEFAULT_BAR_RUNES.to_vec(),
        }
    }

    pub fn ticks() -> Self {
        Self {
            glyphs: DEFAULT_TICK_RUNES.to_vec(),
        }
    }

    /// Number of sub-cell levels per cell.
    pub fn resolution(&self) -> usize {
        self.glyphs.len()
    }

    /// The terminal (full) glyph.
    pub fn full(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Glyph at `level`, clamped to the ramp.
    pub fn glyph(&self, level: usize) -> char {
        self.glyphs[level.min(self.glyphs.len() - 1)]
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::bars()
    }
}

impl std::fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl TryFrom<String> for GlyphRamp {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<GlyphRamp> for String {
    fn from(ramp: GlyphRamp) -> Self {
        ramp.to_string()
    }
}

/// Glyphs for every candle cell shape.
///
/// Default set, box drawing characters:
///
/// ```text
///     ╽   ╷ ╷     │
///     ┃╻  │ ╵ ┃ ─ ┼ ┼ ┬ ┴
///     ╿╹  │
///     │
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OhlcRunes {
    pub same: char,
    pub high_open_close: char,
    pub low_open_close: char,
    pub high_open: char,
    pub low_close: char,
    pub high: char,
    pub low: char,
    pub open_close: char,
    pub open: char,
    pub close: char,
    pub thick: char,
    pub thin: char,
}

impl Default for OhlcRunes {
    fn default() -> Self {
        Self {
            same: '─',
            high_open_close: '┬',
            low_open_close: '┴',
            high_open: '╻',
            low_close: '╹',
            high: '╷',
            low: '╵',
            open_close: '┼',
            open: '╽',
            close: '╿',
            thick: '┃',
            thin: '│',
        }
    }
}

impl OhlcRunes {
    /// Parses the twelve glyphs in table order: same, high-open-close,
    /// low-open-close, high-open, low-close, high, low, open-close, open,
    /// close, thick, thin.
    pub fn parse(s: &str) -> Result<Self, PlotError> {
        let glyphs: Vec<char> = s.chars().collect();
        let [
            same,
            high_open_close,
            low_open_close,
            high_open,
            low_close,
            high,
            low,
            open_close,
            open,
            close,
            thick,
            thin,
        ]: [char; 12] = glyphs
            .as_slice()
            .try_into()
            .map_err(|_| PlotError::InvalidOhlcRunes(glyphs.len()))?;
        Ok(Self {
            same,
            high_open_close,
            low_open_close,
            high_open,
            low_close,
            high,
            low,
            open_close,
            open,
            close,
            thick,
            thin,
        })
    }

    /// Rune drawn for a candle cell shape.
    pub fn glyph(&self, shape: CandleGlyph) -> char {
        match shape {
            CandleGlyph::Same => self.same,
            CandleGlyph::HighOpenClose => self.high_open_close,
            CandleGlyph::LowOpenClose => self.low_open_close,
            CandleGlyph::HighOpen => self.high_open,
            CandleGlyph::LowClose => self.low_close,
            CandleGlyph::High => self.high,
            CandleGlyph::Low => self.low,
            CandleGlyph::OpenClose => self.open_close,
            CandleGlyph::Open => self.open,
            CandleGlyph::Close => self.close,
            CandleGlyph::Thick => self.thick,
            CandleGlyph::Thin => self.thin,
        }
    }

    fn as_array(&self) -> [char; 12] {
        [
            self.same,
            self.high_open_close,
            self.low_open_close,
            self.high_open,
            self.low_close,
            self.high,
            self.low,
            self.open_close,
            self.open,
            self.close,
            self.thick,
            self.thin,
        ]
    }
}

impl TryFrom<String> for OhlcRunes {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<OhlcRunes> for String {
    fn from(runes: OhlcRunes) -> Self {
        runes.as_array().iter().collect()
    }
}
