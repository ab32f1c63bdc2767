//! Draw target — the single-cell write interface every widget renders through.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

/// Anything a chart can write glyphs into.
pub trait DrawTarget {
    /// Writes `glyph` with `style` at column `x`, row `y`.
    ///
    /// Cells outside the target are ignored.
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: Style);

    /// Like [`DrawTarget::set_cell`], for signed layout arithmetic. Negative or
    /// overflowing coordinates are skipped.
    fn put(&mut self, x: i64, y: i64, glyph: char, style: Style) {
        if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
            self.set_cell(x, y, glyph, style);
        }
    }
}

impl DrawTarget for Buffer {
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: Style) {
        if let Some(cell) = self.cell_mut((x, y)) {
            cell.set_char(glyph).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    #[test]
    fn buffer_target_writes_inside_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.set_cell(1, 1, '█', Style::default().fg(Color::Red));

        let cell = buf.cell((1, 1)).unwrap();
        assert_eq!(cell.symbol(), "█");
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn buffer_target_ignores_outside_cells() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.set_cell(10, 10, 'x', Style::default());
        buf.put(-1, 0, 'x', Style::default());
        buf.put(0, i64::from(u16::MAX) + 1, 'x', Style::default());

        assert!(buf.content.iter().all(|c| c.symbol() == " "));
    }
}
