//! Bars — vertical bars with sub-cell tops.
//!
//! A value scaled to `v` on a ramp of `N` glyphs fills `v / N` whole cells
//! with the full glyph, then tops them with glyph `v % N - 1` when `v % N > 0`.

use std::ops::{Deref, DerefMut};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tickplot_core::{Decimal, LinearScale, Range};

use crate::runes::GlyphRamp;
use crate::series::{Plot, Series};
use crate::target::DrawTarget;

/// Bar plot over a series of values.
#[derive(Debug, Clone)]
pub struct Bars<D = tickplot_core::rust_decimal::Decimal> {
    series: Series<D>,
}

impl<D: Decimal> Default for Bars<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decimal> Bars<D> {
    pub fn new() -> Self {
        Self {
            series: Series::new(GlyphRamp::bars()),
        }
    }

    pub fn with_data(data: Vec<D>) -> Self {
        let mut bars = Self::new();
        bars.set_data(data);
        bars
    }

    pub fn draw<T: DrawTarget + ?Sized>(&mut self, target: &mut T, area: Rect) {
        let cells = self.series.layout(area);
        let style = self.series.style();
        let ramp = self.series.runes();
        let bottom = i64::from(area.bottom());

        for cell in &cells {
            for j in 1..=cell.full {
                target.put(cell.x, bottom - j, ramp.full(), style);
            }
            if cell.rem > 0 {
                target.put(cell.x, bottom - cell.full - 1, ramp.glyph(cell.rem - 1), style);
            }
        }
        tracing::trace!(points = cells.len(), ?area, "bars drawn");
    }
}

impl<D> Deref for Bars<D> {
    type Target = Series<D>;

    fn deref(&self) -> &Self::Target {
        &self.series
    }
}

impl<D> DerefMut for Bars<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.series
    }
}

impl<D: Decimal> Plot<D> for Bars<D> {
    fn scale(&self) -> &LinearScale<D> {
        self.series.scale()
    }

    fn set_scale(&mut self, scale: LinearScale<D>) {
        self.series.set_scale(scale);
    }

    fn visible_range(&self, width: u16) -> Range<D> {
        self.series.visible_range(width)
    }

    fn draw_plot(&mut self, target: &mut dyn DrawTarget, area: Rect) {
        self.draw(target, area);
    }
}

impl<D: Decimal> Widget for &mut Bars<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(buf, area);
    }
}
