//! Ticks — one mark per value at sub-cell height.
//!
//! A value scaled to `v` on a ramp of `N` glyphs draws glyph `v % N` in the
//! cell `v / N` rows above the bottom. Every value yields exactly one glyph,
//! the bottom level of a cell included.

use std::ops::{Deref, DerefMut};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tickplot_core::{Decimal, LinearScale, Range};

use crate::runes::GlyphRamp;
use crate::series::{Plot, Series};
use crate::target::DrawTarget;

/// Tick plot over a series of values.
#[derive(Debug, Clone)]
pub struct Ticks<D = tickplot_core::rust_decimal::Decimal> {
    series: Series<D>,
}

impl<D: Decimal> Default for Ticks<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decimal> Ticks<D> {
    pub fn new() -> Self {
        Self {
            series: Series::new(GlyphRamp::ticks()),
        }
    }

    pub fn with_data(data: Vec<D>) -> Self {
        let mut ticks = Self::new();
        ticks.set_data(data);
        ticks
    }

    pub fn draw<T: DrawTarget + ?Sized>(&mut self, target: &mut T, area: Rect) {
        let cells = self.series.layout(area);
        let style = self.series.style();
        let ramp = self.series.runes();
        let bottom = i64::from(area.bottom());

        for cell in &cells {
            target.put(cell.x, bottom - cell.full - 1, ramp.glyph(cell.rem), style);
        }
        tracing::trace!(points = cells.len(), ?area, "ticks drawn");
    }
}

impl<D> Deref for Ticks<D> {
    type Target = Series<D>;

    fn deref(&self) -> &Self::Target {
        &self.series
    }
}

impl<D> DerefMut for Ticks<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.series
    }
}

impl<D: Decimal> Plot<D> for Ticks<D> {
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

impl<D: Decimal> Widget for &mut Ticks<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(buf, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_lines, d, dec};

    fn render(ticks: &mut Ticks, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        ticks.draw(&mut buf, area);
        buf
    }

    #[test]
    fn one_mark_per_value() {
        let data = ["0", "1.5", "2.2", "3.4", "4.6", "5.8", "6", "9.2", "8.5", "10"]
            .into_iter()
            .map(dec)
            .collect();
        let mut t = Ticks::with_data(data);
        let buf = render(&mut t, Rect::new(0, 0, 12, 10));

        // 10 rows * 5 levels over 0..=10; 9.2 and 2.2 land on a bottom level
        assert_eq!(
            buffer_lines(&buf),
            vec![
                "         ⎽ ⎺",
                "          ⎼",
                "",
                "",
                "       ⎻⎺",
                "      —",
                "     ⎼",
                "    ⎽",
                "   —",
                "  ⎽",
            ]
        );
    }

    #[test]
    fn mark_count_equals_visible_points() {
        let mut t = Ticks::with_data((0..40).map(d).collect());
        let area = Rect::new(0, 0, 16, 6);
        let buf = render(&mut t, area);

        let marks = buf.content().iter().filter(|c| c.symbol() != " ").count();
        assert_eq!(marks, 16);
        assert_eq!(t.scale().range(), Range::new(d(24), d(39)));
    }

    #[test]
    fn flat_series_marks_the_bottom_row() {
        let mut t = Ticks::with_data(vec![d(3); 4]);
        let buf = render(&mut t, Rect::new(0, 0, 4, 3));
        assert_eq!(buffer_lines(&buf), vec!["", "", "⎽⎽⎽⎽"]);
    }
}
