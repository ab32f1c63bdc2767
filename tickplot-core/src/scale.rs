//! Linear scale — maps decimals onto terminal cells and back.
//!
//! A scale is a [`Range`] plus a cell count. Going forward
//! ([`LinearScale::value`]) truncates toward zero after the multiply, which
//! decides the cell a boundary-adjacent value lands in; candle and bar glyph
//! selection depend on that exact rule. Going back
//! ([`LinearScale::reverse`]) returns the value at the start of a cell.

use crate::decimal::Decimal;
use crate::range::Range;

/// Linear mapping between a value range and `size` cells.
///
/// The scale is a plain value: cloning it gives an independent copy, which is
/// how a plot renders with extra sub-cell resolution while the axis keeps the
/// original size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale<D> {
    range: Range<D>,
    size: usize,
}

impl<D> Default for LinearScale<D> {
    fn default() -> Self {
        Self {
            range: Range::default(),
            size: 0,
        }
    }
}

impl<D: Decimal> LinearScale<D> {
    pub fn new(range: Range<D>, size: usize) -> Self {
        Self { range, size }
    }

    pub fn range(&self) -> Range<D> {
        self.range
    }

    pub fn set_range(&mut self, range: Range<D>) {
        self.range = range;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// An independent copy of this scale with a different size.
    #[must_use]
    pub fn with_size(&self, size: usize) -> Self {
        Self {
            range: self.range,
            size,
        }
    }

    /// `(min, max)`, with an unset range reading as a flat range at zero.
    fn bounds(&self) -> (D, D) {
        self.range.bounds().unwrap_or((D::zero(), D::zero()))
    }

    fn cells(&self) -> i64 {
        i64::try_from(self.size.saturating_sub(1)).unwrap_or(i64::MAX)
    }

    /// Distance between two adjacent cells. Zero when `size <= 1`.
    pub fn step(&self) -> D {
        let (min, max) = self.bounds();
        let cells = match self.cells() {
            cells if cells > 0 => D::from_i64(cells),
            _ => return D::zero(),
        };
        match max.checked_sub(min) {
            Some(span) => span / cells,
            // The span itself overflows; divide the bounds first.
            None => max / cells - min / cells,
        }
    }

    /// Cell index of `value`.
    ///
    /// Values outside the range land outside `[0, size)`; callers clamp when
    /// they need to. A flat range maps everything to cell 0. Results beyond
    /// the backend's reach saturate at the `i64` bounds.
    pub fn value(&self, value: D) -> i64 {
        let (min, max) = self.bounds();
        if min == max {
            return 0;
        }
        let cells = D::from_i64(self.cells());
        let four = D::from_i64(4);

        let exact = || {
            let offset = value.checked_sub(min)?;
            let span = max.checked_sub(min)?;
            offset
                .checked_mul(cells)
                .and_then(|product| product.checked_div(span))
                .or_else(|| offset.checked_div(span)?.checked_mul(cells))
        };
        // Bounds too far apart for the backend: work on quarters.
        let quartered = || {
            let offset = (value / four).checked_sub(min / four)?;
            let span = (max / four).checked_sub(min / four)?;
            offset.checked_div(span)?.checked_mul(cells)
        };

        match exact().or_else(quartered) {
            Some(cell) => cell.int_part(),
            None if value > min => i64::MAX,
            None => i64::MIN,
        }
    }

    /// Value at the start of cell `cell`, limited to the range when it cannot
    /// be represented.
    pub fn reverse(&self, cell: i64) -> D {
        let (min, max) = self.bounds();
        D::from_i64(cell)
            .checked_mul(self.step())
            .and_then(|distance| min.checked_add(distance))
            .unwrap_or(if cell > 0 { max } else { min })
    }

    /// Fraction digits needed to tell adjacent cells apart.
    pub fn num_decimals(&self) -> usize {
        let step = self.step();
        if step.is_zero() {
            return 0;
        }
        let exponent = step.as_f64().abs().log10();
        if exponent < 0.0 {
            exponent.abs().trunc() as usize
        } else {
            0
        }
    }
}
