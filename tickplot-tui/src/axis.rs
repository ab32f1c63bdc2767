//! Vertical value axis drawn beside a chart body.
//!
//! Labels grow bottom-to-top: the bottom row shows `reverse(0)`, the top row
//! `reverse(height - 1)`. Each label carries `num_decimals + 2` fraction
//! digits. When a highlight value is set, the row it scales to shows the exact
//! highlight value (not the interpolated one) in the highlight style.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use tickplot_core::{Decimal, LinearScale};

use crate::target::DrawTarget;

/// One formatted axis row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub text: String,
    pub highlighted: bool,
}

/// Vertical axis for a [`LinearScale`].
#[derive(Debug, Clone)]
pub struct Axis<D = tickplot_core::rust_decimal::Decimal> {
    scale: LinearScale<D>,
    style: Style,
    highlight_style: Style,
    highlight: Option<D>,
}

impl<D: Decimal> Default for Axis<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decimal> Axis<D> {
    pub fn new() -> Self {
        Self {
            scale: LinearScale::default(),
            style: Style::default(),
            highlight_style: Style::default(),
            highlight: None,
        }
    }

    pub fn set_scale(&mut self, scale: LinearScale<D>) {
        self.scale = scale;
    }

    pub fn scale(&self) -> &LinearScale<D> {
        &self.scale
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_highlight_style(&mut self, style: Style) {
        self.highlight_style = style;
    }

    pub fn highlight_style(&self) -> Style {
        self.highlight_style
    }

    /// Value to show verbatim on the row it scales to.
    pub fn set_highlight(&mut self, highlight: Option<D>) {
        self.highlight = highlight;
    }

    pub fn highlight(&self) -> Option<D> {
        self.highlight
    }

    fn precision(&self) -> usize {
        self.scale.num_decimals() + 2
    }

    /// Columns the axis needs: the rounded maximum, one column for the decimal
    /// point, and the fraction digits.
    pub fn calc_width(&self) -> usize {
        let max = self.scale.range().max().unwrap_or_else(D::zero);
        max.rounded().to_string().chars().count() + 1 + self.precision()
    }

    /// Labels for `height` rows, top row first.
    pub fn labels(&self, height: usize) -> Vec<AxisLabel> {
        let precision = self.precision();
        let highlight = self.highlight.map(|h| (self.scale.value(h), h));

        (0..height)
            .rev()
            .map(|cell| {
                let cell = cell as i64;
                let (value, highlighted) = match highlight {
                    Some((at, h)) if at == cell => (h, true),
                    _ => (self.scale.reverse(cell), false),
                };
                AxisLabel {
                    text: format!("{:.*}", precision, value.as_f64()),
                    highlighted,
                }
            })
            .collect()
    }

    /// Draws the labels right-aligned in `area`; draws nothing when the
    /// longest label does not fit.
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T, area: Rect) {
        if area.is_empty() {
            return;
        }

        let labels = self.labels(usize::from(area.height));
        let max_width = labels
            .iter()
            .map(|l| l.text.chars().count())
            .max()
            .unwrap_or(0);

        if usize::from(area.width) < max_width {
            tracing::debug!(width = area.width, max_width, "axis hidden, no room");
            return;
        }

        let right = i64::from(area.right());
        for (row, label) in labels.iter().enumerate() {
            let y = i64::from(area.y) + row as i64;
            let style = if label.highlighted {
                self.highlight_style
            } else {
                self.style
            };
            let start = right - label.text.chars().count() as i64;
            for (i, ch) in label.text.chars().enumerate() {
                target.put(start + i as i64, y, ch, style);
            }
        }
    }
}

impl<D: Decimal> Widget for &Axis<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(buf, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_lines, d};
    use ratatui::style::Color;
    use tickplot_core::Range;

    fn price_axis() -> Axis {
        let mut axis = Axis::new();
        axis.set_scale(LinearScale::new(Range::new(d(5), d(30)), 24));
        axis
    }

    #[test]
    fn calc_width_uses_rounded_max_and_precision() {
        // "30" + "." + 2 digits
        assert_eq!(price_axis().calc_width(), 5);

        let mut volume = Axis::new();
        volume.set_scale(LinearScale::new(Range::new(d(200), d(1000)), 6));
        assert_eq!(volume.calc_width(), 7);
    }

    #[test]
    fn calc_width_grows_with_precision() {
        let mut axis = Axis::new();
        // step = 1 / 99, one significant decimal, four printed digits
        axis.set_scale(LinearScale::new(Range::new(d(0), d(1)), 100));
        assert_eq!(axis.calc_width(), 1 + 1 + 3);
    }

    #[test]
    fn labels_grow_bottom_to_top() {
        let labels = price_axis().labels(24);
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0].text, "30.00");
        assert_eq!(labels[22].text, "6.09");
        assert_eq!(labels[23].text, "5.00");
        assert!(labels.iter().all(|l| !l.highlighted));
    }

    #[test]
    fn highlight_replaces_the_interpolated_label() {
        let mut axis = price_axis();
        axis.set_highlight(Some(d(15)));

        let labels = axis.labels(24);
        // value(15) = trunc(10 * 23 / 25) = 9, the 10th row from the bottom
        assert_eq!(labels[14].text, "15.00");
        assert!(labels[14].highlighted);
        assert_eq!(labels.iter().filter(|l| l.highlighted).count(), 1);
    }

    #[test]
    fn draw_right_aligns_labels() {
        let mut axis = price_axis();
        axis.set_style(Style::default().fg(Color::Cyan));
        axis.set_highlight_style(Style::default().fg(Color::White));
        axis.set_highlight(Some(d(15)));

        let area = Rect::new(0, 0, 7, 24);
        let mut buf = Buffer::empty(area);
        axis.draw(&mut buf, area);

        let lines = buffer_lines(&buf);
        assert_eq!(lines[0], "  30.00");
        assert_eq!(lines[14], "  15.00");
        assert_eq!(lines[23], "   5.00");
        assert_eq!(buf.cell((2, 0)).unwrap().fg, Color::Cyan);
        assert_eq!(buf.cell((2, 14)).unwrap().fg, Color::White);
    }

    #[test]
    fn draw_hides_axis_without_room() {
        let axis = price_axis();
        let area = Rect::new(0, 0, 4, 24);
        let mut buf = Buffer::empty(area);
        axis.draw(&mut buf, area);

        assert!(buffer_lines(&buf).iter().all(|l| l.is_empty()));
    }
}
