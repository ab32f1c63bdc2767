//! Range — observed minimum/maximum of a decimal sequence.

use crate::decimal::Decimal;

/// The `[min, max]` span of the values fed so far.
///
/// A range starts unset. Feeding never mutates in place: [`Range::feed`]
/// returns the widened range, so callers can branch a computation from any
/// intermediate state. Reading the bounds of an unset range yields `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<D> {
    bounds: Option<(D, D)>,
}

impl<D> Default for Range<D> {
    fn default() -> Self {
        Self { bounds: None }
    }
}

impl<D: Decimal> Range<D> {
    /// An empty range.
    pub const fn unset() -> Self {
        Self { bounds: None }
    }

    /// A range spanning `a` and `b`, in either order.
    pub fn new(a: D, b: D) -> Self {
        Self::unset().feed(a).feed(b)
    }

    /// Folds every value of `values` into an unset range.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = D>,
    {
        values.into_iter().fold(Self::unset(), Self::feed)
    }

    /// Returns the range widened to include `value`.
    #[must_use]
    pub fn feed(self, value: D) -> Self {
        let bounds = match self.bounds {
            None => (value, value),
            Some((min, max)) => (
                if value < min { value } else { min },
                if value > max { value } else { max },
            ),
        };
        Self {
            bounds: Some(bounds),
        }
    }

    pub fn is_set(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn min(&self) -> Option<D> {
        self.bounds.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<D> {
        self.bounds.map(|(_, max)| max)
    }

    /// `(min, max)` when set.
    pub fn bounds(&self) -> Option<(D, D)> {
        self.bounds
    }
}

impl<D: Decimal> FromIterator<D> for Range<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal as Dec;

    fn d(v: i64) -> Dec {
        Dec::from(v)
    }

    #[test]
    fn starts_unset() {
        let rng: Range<Dec> = Range::unset();
        assert!(!rng.is_set());
        assert_eq!(rng.min(), None);
        assert_eq!(rng.max(), None);
        assert_eq!(rng, Range::default());
    }

    #[test]
    fn first_feed_sets_both_bounds() {
        let rng = Range::unset().feed(d(7));
        assert!(rng.is_set());
        assert_eq!(rng.bounds(), Some((d(7), d(7))));
    }

    #[test]
    fn fold_scenario() {
        let rng: Range<Dec> = [10, 30, 5, 15].into_iter().map(d).collect();
        assert_eq!(rng.min(), Some(d(5)));
        assert_eq!(rng.max(), Some(d(30)));
    }

    #[test]
    fn feed_does_not_mutate_the_source() {
        let base = Range::new(d(1), d(2));
        let wider = base.feed(d(10));
        assert_eq!(base.max(), Some(d(2)));
        assert_eq!(wider.max(), Some(d(10)));
    }

    #[test]
    fn bounds_only_widen() {
        let rng = Range::new(d(5), d(10)).feed(d(7));
        assert_eq!(rng.bounds(), Some((d(5), d(10))));
    }

    #[test]
    fn new_accepts_either_order() {
        assert_eq!(Range::new(d(9), d(3)).bounds(), Some((d(3), d(9))));
    }
}
