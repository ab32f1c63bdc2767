//! Series — state and fractional layout shared by bars and ticks.
//!
//! A glyph ramp of length `N` gives each cell `N` sub-levels. The series'
//! axis-facing scale keeps `size = height`; a copy resized to `height * N`
//! places each value, and the scaled value splits into whole cells
//! (`v / N`) and a ramp index (`v % N`). Scaled values are clamped to
//! `[0, height * N - 1]`, which keeps every ramp lookup in bounds.

use ratatui::layout::Rect;
use ratatui::style::Style;
use tickplot_core::{capacity, window, Decimal, LinearScale, Range, SliceMethod};

use crate::runes::GlyphRamp;
use crate::target::DrawTarget;

/// A plot that owns a scale an axis can follow.
pub trait Plot<D: Decimal> {
    fn scale(&self) -> &LinearScale<D>;

    fn set_scale(&mut self, scale: LinearScale<D>);

    /// Range of the values that fit in a body `width` cells wide.
    fn visible_range(&self, width: u16) -> Range<D>;

    /// Draws into `area`, leaving `scale()` set to what was drawn.
    fn draw_plot(&mut self, target: &mut dyn DrawTarget, area: Rect);
}

/// Placement of one value in fractional cell space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionalCell {
    /// Column of the value.
    pub x: i64,
    /// Scaled value in `[0, height * N)`.
    pub scaled: i64,
    /// Whole cells below the value.
    pub full: i64,
    /// Ramp index inside the topmost cell.
    pub rem: usize,
}

/// Data, spacing, slicing and glyph state of a 1-D value plot.
#[derive(Debug, Clone)]
pub struct Series<D = tickplot_core::rust_decimal::Decimal> {
    data: Vec<D>,
    scale: LinearScale<D>,
    style: Style,
    spacing: u16,
    slice_method: SliceMethod,
    runes: GlyphRamp,
}

impl<D: Decimal> Series<D> {
    pub fn new(runes: GlyphRamp) -> Self {
        Self {
            data: Vec::new(),
            scale: LinearScale::default(),
            style: Style::default(),
            spacing: 1,
            slice_method: SliceMethod::default(),
            runes,
        }
    }

    pub fn set_data(&mut self, data: Vec<D>) {
        self.data = data;
    }

    pub fn data(&self) -> &[D] {
        &self.data
    }

    /// Cells per data point; 0 is stored as 1.
    pub fn set_spacing(&mut self, spacing: u16) {
        self.spacing = spacing.max(1);
    }

    pub fn spacing(&self) -> u16 {
        self.spacing
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_slice_method(&mut self, method: SliceMethod) {
        self.slice_method = method;
    }

    pub fn slice_method(&self) -> SliceMethod {
        self.slice_method
    }

    pub fn set_runes(&mut self, runes: GlyphRamp) {
        self.runes = runes;
    }

    pub fn runes(&self) -> &GlyphRamp {
        &self.runes
    }

    pub fn set_scale(&mut self, scale: LinearScale<D>) {
        self.scale = scale;
    }

    pub fn scale(&self) -> &LinearScale<D> {
        &self.scale
    }

    /// The data points that fit in `width` cells.
    pub fn visible(&self, width: u16) -> &[D] {
        let max_count = capacity(usize::from(width), usize::from(self.spacing));
        window(&self.data, max_count, self.slice_method)
    }

    pub fn visible_range(&self, width: u16) -> Range<D> {
        Range::from_values(self.visible(width).iter().copied())
    }

    /// Lays the visible window out in `area`.
    ///
    /// Updates the series scale to the visible range and `area.height`.
    pub fn layout(&mut self, area: Rect) -> Vec<FractionalCell> {
        let height = usize::from(area.height);
        let range = self.visible_range(area.width);
        self.scale.set_range(range);
        self.scale.set_size(height);

        if area.is_empty() {
            return Vec::new();
        }

        let levels = self.runes.resolution();
        let fine = self.scale.with_size(height * levels);
        let top = (height * levels) as i64 - 1;
        let levels = levels as i64;

        let visible = self.visible(area.width);
        let spacing = i64::from(self.spacing);
        let left = i64::from(area.x) + i64::from(area.width) - visible.len() as i64 * spacing;

        visible
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let scaled = fine.value(*value).clamp(0, top);
                FractionalCell {
                    x: left + i as i64 * spacing,
                    scaled,
                    full: scaled / levels,
                    rem: (scaled % levels) as usize,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::d;

    fn series(values: &[i64]) -> Series {
        let mut s = Series::new(GlyphRamp::bars());
        s.set_data(values.iter().copied().map(d).collect());
        s
    }

    #[test]
    fn spacing_zero_is_stored_as_one() {
        let mut s = series(&[]);
        s.set_spacing(0);
        assert_eq!(s.spacing(), 1);
    }

    #[test]
    fn visible_window_follows_slice_method() {
        let mut s = series(&[1, 2, 3, 4, 5, 6]);
        s.set_spacing(2);
        assert_eq!(s.visible(6), &[d(4), d(5), d(6)]);

        s.set_slice_method(SliceMethod::First);
        assert_eq!(s.visible(6), &[d(1), d(2), d(3)]);
        assert_eq!(s.visible_range(6), Range::new(d(1), d(3)));
    }

    #[test]
    fn layout_splits_whole_and_fractional_levels() {
        // fine scale: 5 rows * 4 levels = 20 cells over 0..=19
        let mut s = series(&[0, 13, 19]);
        let cells = s.layout(Rect::new(0, 0, 3, 5));

        assert_eq!(cells[1].scaled, 13);
        assert_eq!(cells[1].full, 3);
        assert_eq!(cells[1].rem, 1);
        assert_eq!(cells[2].full, 4);
        assert_eq!(cells[2].rem, 3);
        assert_eq!(cells.iter().map(|c| c.x).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn layout_leaves_axis_scale_at_row_resolution() {
        let mut s = series(&[0, 13, 19]);
        s.layout(Rect::new(0, 0, 3, 5));
        assert_eq!(s.scale().size(), 5);
        assert_eq!(s.scale().range(), Range::new(d(0), d(19)));
    }

    #[test]
    fn layout_right_aligns_with_spacing() {
        let mut s = series(&[1, 2]);
        s.set_spacing(3);
        let cells = s.layout(Rect::new(10, 0, 9, 4));
        // 9 - 2 * 3 = 3 cells of slack on the left
        assert_eq!(cells.iter().map(|c| c.x).collect::<Vec<_>>(), vec![13, 16]);
    }

    #[test]
    fn layout_tops_out_at_the_last_level() {
        let mut s = series(&[5, 10]);
        let cells = s.layout(Rect::new(0, 0, 2, 3));
        // 3 rows * 4 levels
        assert_eq!(cells[0].scaled, 0);
        assert_eq!(cells[1].scaled, 11);
        assert_eq!((cells[1].full, cells[1].rem), (2, 3));
    }

    #[test]
    fn flat_series_sits_on_the_bottom_level() {
        let mut s = series(&[7, 7, 7]);
        let cells = s.layout(Rect::new(0, 0, 3, 4));
        assert!(cells.iter().all(|c| c.scaled == 0));
    }

    #[test]
    fn empty_area_lays_out_nothing() {
        let mut s = series(&[1, 2, 3]);
        assert!(s.layout(Rect::new(0, 0, 0, 5)).is_empty());
        assert!(s.layout(Rect::new(0, 0, 5, 0)).is_empty());
    }
}
