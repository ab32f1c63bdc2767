//! AxisBox — a plot with an axis on one side.
//!
//! The axis width is estimated from the range the plot would show at the full
//! width. The plot is drawn first, in whatever width is left, and the axis then
//! takes the scale the plot actually used.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use serde::{Deserialize, Serialize};
use tickplot_core::{Decimal, LinearScale};

use crate::axis::Axis;
use crate::series::Plot;
use crate::target::DrawTarget;

/// Side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct AxisBox<P, D = tickplot_core::rust_decimal::Decimal> {
    axis: Axis<D>,
    content: P,
    position: AxisPosition,
}

impl<P: Plot<D>, D: Decimal> AxisBox<P, D> {
    pub fn new(axis: Axis<D>, content: P) -> Self {
        Self {
            axis,
            content,
            position: AxisPosition::default(),
        }
    }

    pub fn set_position(&mut self, position: AxisPosition) {
        self.position = position;
    }

    pub fn position(&self) -> AxisPosition {
        self.position
    }

    pub fn axis(&self) -> &Axis<D> {
        &self.axis
    }

    pub fn axis_mut(&mut self) -> &mut Axis<D> {
        &mut self.axis
    }

    pub fn content(&self) -> &P {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut P {
        &mut self.content
    }

    /// Splits `area` into (plot, axis). The axis area is empty when the axis
    /// would leave no room for the plot.
    pub fn layout(&mut self, area: Rect) -> (Rect, Rect) {
        let estimate = LinearScale::new(
            self.content.visible_range(area.width),
            usize::from(area.height),
        );
        self.axis.set_scale(estimate);

        let axis_width = u16::try_from(self.axis.calc_width()).unwrap_or(u16::MAX);
        if area.width <= axis_width {
            tracing::debug!(width = area.width, axis_width, "axis box without axis");
            return (area, Rect::new(area.x, area.y, 0, area.height));
        }

        let body_width = area.width - axis_width;
        match self.position {
            AxisPosition::Left => (
                Rect::new(area.x + axis_width, area.y, body_width, area.height),
                Rect::new(area.x, area.y, axis_width, area.height),
            ),
            AxisPosition::Right => (
                Rect::new(area.x, area.y, body_width, area.height),
                Rect::new(area.x + body_width, area.y, axis_width, area.height),
            ),
        }
    }

    pub fn draw<T: DrawTarget>(&mut self, target: &mut T, area: Rect) {
        let (body, axis) = self.layout(area);

        self.content.draw_plot(target, body);
        self.axis.set_scale(*self.content.scale());

        if !axis.is_empty() {
            self.axis.draw(target, axis);
        }
    }
}

impl<P: Plot<D>, D: Decimal> Widget for &mut AxisBox<P, D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(buf, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::Bars;
    use crate::test_helpers::{buffer_lines, d};

    fn axis_box(position: AxisPosition) -> AxisBox<Bars> {
        let bars = Bars::with_data(vec![d(0), d(10), d(20)]);
        let mut b = AxisBox::new(Axis::new(), bars);
        b.set_position(position);
        b
    }

    fn render(b: &mut AxisBox<Bars>, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        b.draw(&mut buf, area);
        buffer_lines(&buf)
    }

    #[test]
    fn axis_on_the_right() {
        let mut b = axis_box(AxisPosition::Right);
        let lines = render(&mut b, Rect::new(0, 0, 10, 5));

        assert_eq!(
            lines,
            vec![
                "    ▆20.00",
                "    █15.00",
                "   ▃█10.00",
                "   ██ 5.00",
                "   ██ 0.00",
            ]
        );
    }

    #[test]
    fn axis_on_the_left() {
        let mut b = axis_box(AxisPosition::Left);
        let lines = render(&mut b, Rect::new(0, 0, 10, 5));

        assert_eq!(lines[0], "20.00    ▆");
        assert_eq!(lines[2], "10.00   ▃█");
        assert_eq!(lines[4], " 0.00   ██");
    }

    #[test]
    fn axis_takes_the_drawn_scale() {
        let mut b = axis_box(AxisPosition::Right);
        render(&mut b, Rect::new(0, 0, 10, 5));
        assert_eq!(b.axis().scale(), b.content().scale());
    }

    #[test]
    fn axis_hidden_when_it_leaves_no_room() {
        let mut b = axis_box(AxisPosition::Left);
        let lines = render(&mut b, Rect::new(0, 0, 5, 5));

        assert_eq!(lines[0], "    ▆");
        assert_eq!(lines[4], "   ██");
    }
}
