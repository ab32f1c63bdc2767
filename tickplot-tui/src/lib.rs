//! Tickplot TUI — ratatui widgets for value series and OHLC data.
//!
//! Provides:
//! - `Axis` value labels and `AxisBox` to pair one with a plot
//! - `Bars` and `Ticks` with sub-cell glyph ramps
//! - `OhlcCandles` and the composite `OhlcChart` (candles, volume, axes)
//! - chart configuration, themes and key/mouse scrolling
//!
//! Every widget renders through [`DrawTarget`], implemented for
//! `ratatui::buffer::Buffer`, and also implements `Widget` for a reference.

pub mod axis;
pub mod axis_box;
pub mod bars;
pub mod candles;
pub mod chart;
pub mod config;
pub mod navigation;
pub mod runes;
pub mod series;
pub mod target;
pub mod theme;
pub mod ticks;

pub use axis::{Axis, AxisLabel};
pub use axis_box::{AxisBox, AxisPosition};
pub use bars::Bars;
pub use candles::{CandleGlyph, OhlcCandles};
pub use chart::{ChartLayout, OhlcChart, DEFAULT_VOLUME_FRACTION};
pub use config::{ChartConfig, ConfigError};
pub use navigation::{handle_key, handle_mouse};
pub use runes::{GlyphRamp, OhlcRunes, DEFAULT_BAR_RUNES, DEFAULT_TICK_RUNES};
pub use series::{FractionalCell, Plot, Series};
pub use target::DrawTarget;
pub use theme::{Theme, ThemeName};
pub use ticks::Ticks;

#[cfg(test)]
mod test_helpers;
