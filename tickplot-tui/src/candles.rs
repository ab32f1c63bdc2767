//! OHLC candles.
//!
//! Each candle occupies one column. The rows between its scaled low and high
//! are filled top-down; the glyph of a row depends on which of high, low,
//! body top and body bottom fall on it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use tickplot_core::{
    capacity, scale_items, value_range, window, Decimal, LinearScale, OhlcItem, Range,
    ScaledOhlcItem, SliceMethod,
};

use crate::runes::OhlcRunes;
use crate::target::DrawTarget;

/// Shape of one candle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandleGlyph {
    /// High, low, open and close on one row
    Same,
    HighOpenClose,
    LowOpenClose,
    HighOpen,
    LowClose,
    High,
    Low,
    OpenClose,
    Open,
    Close,
    /// Inside the body
    Thick,
    /// Wick
    Thin,
}

impl CandleGlyph {
    /// Picks the shape of row `row` of `candle`; the first matching case wins.
    ///
    /// "Open" is the body top and "close" the body bottom, whatever the
    /// candle's direction.
    pub fn select(row: i64, candle: &ScaledOhlcItem) -> Self {
        let top = candle.body_top();
        let bottom = candle.body_bottom();

        let is_high = row == candle.high;
        let is_low = row == candle.low;
        let is_open = row == top;
        let is_close = row == bottom;

        match () {
            _ if is_high && is_low && is_open && is_close => Self::Same,
            _ if is_high && is_open && is_close => Self::HighOpenClose,
            _ if is_low && is_open && is_close => Self::LowOpenClose,
            _ if is_high && is_open => Self::HighOpen,
            _ if is_low && is_close => Self::LowClose,
            _ if is_high => Self::High,
            _ if is_low => Self::Low,
            _ if is_open && is_close => Self::OpenClose,
            _ if is_open => Self::Open,
            _ if is_close => Self::Close,
            _ if bottom < row && row < top => Self::Thick,
            _ => Self::Thin,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Self::HighOpen | Self::LowClose | Self::Thick)
    }
}

/// Candle plot over OHLC items.
#[derive(Debug, Clone)]
pub struct OhlcCandles<D = tickplot_core::rust_decimal::Decimal> {
    items: Vec<OhlcItem<D>>,
    scale: LinearScale<D>,
    spacing: u16,
    slice_method: SliceMethod,
    positive_style: Style,
    negative_style: Style,
    runes: OhlcRunes,
}

impl<D: Decimal> Default for OhlcCandles<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decimal> OhlcCandles<D> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            scale: LinearScale::default(),
            spacing: 1,
            slice_method: SliceMethod::default(),
            positive_style: Style::default(),
            negative_style: Style::default(),
            runes: OhlcRunes::default(),
        }
    }

    pub fn set_items(&mut self, items: Vec<OhlcItem<D>>) {
        self.items = items;
    }

    pub fn items(&self) -> &[OhlcItem<D>] {
        &self.items
    }

    pub fn set_spacing(&mut self, spacing: u16) {
        self.spacing = spacing.max(1);
    }

    pub fn spacing(&self) -> u16 {
        self.spacing
    }

    pub fn set_slice_method(&mut self, method: SliceMethod) {
        self.slice_method = method;
    }

    pub fn slice_method(&self) -> SliceMethod {
        self.slice_method
    }

    pub fn set_positive_style(&mut self, style: Style) {
        self.positive_style = style;
    }

    pub fn positive_style(&self) -> Style {
        self.positive_style
    }

    pub fn set_negative_style(&mut self, style: Style) {
        self.negative_style = style;
    }

    pub fn negative_style(&self) -> Style {
        self.negative_style
    }

    pub fn set_runes(&mut self, runes: OhlcRunes) {
        self.runes = runes;
    }

    pub fn runes(&self) -> &OhlcRunes {
        &self.runes
    }

    pub fn set_scale(&mut self, scale: LinearScale<D>) {
        self.scale = scale;
    }

    pub fn scale(&self) -> &LinearScale<D> {
        &self.scale
    }

    pub fn visible(&self, width: u16) -> &[OhlcItem<D>] {
        let max_count = capacity(usize::from(width), usize::from(self.spacing));
        window(&self.items, max_count, self.slice_method)
    }

    pub fn visible_range(&self, width: u16) -> Range<D> {
        value_range(self.visible(width))
    }

    pub fn draw<T: DrawTarget + ?Sized>(&mut self, target: &mut T, area: Rect) {
        self.scale.set_range(self.visible_range(area.width));
        self.scale.set_size(usize::from(area.height));

        if area.is_empty() {
            return;
        }

        // Volume plays no part in candle placement.
        let no_volume = LinearScale::default();
        let visible = self.visible(area.width);
        let spacing = i64::from(self.spacing);
        let left = i64::from(area.x) + i64::from(area.width) - visible.len() as i64 * spacing;
        let bottom = i64::from(area.bottom());

        let scaled = scale_items(visible, &self.scale, &no_volume);
        for (i, candle) in scaled.iter().enumerate() {
            let style = if candle.is_positive() {
                self.positive_style
            } else {
                self.negative_style
            };
            let x = left + i as i64 * spacing;

            tracing::trace!(
                x,
                open = candle.open,
                high = candle.high,
                low = candle.low,
                close = candle.close,
                "candle"
            );

            for row in (candle.low..=candle.high).rev() {
                let shape = CandleGlyph::select(row, candle);
                let style = if shape.is_bold() {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                };
                target.put(x, bottom - row - 1, self.runes.glyph(shape), style);
            }
        }
    }
}

impl<D: Decimal> Widget for &mut OhlcCandles<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(buf, area);
    }
}
