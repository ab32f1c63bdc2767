//! Windowing — choosing the slice of a series that fits on screen.

use serde::{Deserialize, Serialize};

/// Which end of a series survives when it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceMethod {
    /// Keep the most recent items.
    #[default]
    Last,
    /// Keep the earliest items.
    First,
}

/// Number of points that fit in `width` cells at `spacing` cells per point.
pub fn capacity(width: usize, spacing: usize) -> usize {
    width / spacing.max(1)
}

/// The contiguous part of `data` holding at most `max_count` items.
pub fn window<T>(data: &[T], max_count: usize, method: SliceMethod) -> &[T] {
    let len = data.len();
    if len <= max_count {
        return data;
    }
    match method {
        SliceMethod::Last => &data[len - max_count..],
        SliceMethod::First => &data[..max_count],
    }
}

/// Clamps a scroll offset into `[0, len - 1]`; 0 for an empty series.
pub fn clamp_offset(offset: i64, len: usize) -> usize {
    let last = i64::try_from(len).unwrap_or(i64::MAX).saturating_sub(1);
    usize::try_from(offset.min(last).max(0)).unwrap_or(0)
}

/// The items left after scrolling `offset` items away from the newest.
pub fn before_offset<T>(data: &[T], offset: usize) -> &[T] {
    match data.len().checked_sub(offset) {
        Some(end) => &data[..end],
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_trailing_items() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(window(&data, 3, SliceMethod::Last), &[3, 4, 5]);
    }

    #[test]
    fn window_keeps_leading_items() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(window(&data, 2, SliceMethod::First), &[1, 2]);
    }

    #[test]
    fn window_passes_short_series_through() {
        let data = [1, 2];
        assert_eq!(window(&data, 10, SliceMethod::Last), &[1, 2]);
        assert!(window(&data, 0, SliceMethod::Last).is_empty());
    }

    #[test]
    fn capacity_divides_by_spacing() {
        assert_eq!(capacity(13, 1), 13);
        assert_eq!(capacity(13, 3), 4);
        assert_eq!(capacity(13, 0), 13);
    }

    #[test]
    fn offsets_are_clamped() {
        assert_eq!(clamp_offset(-3, 10), 0);
        assert_eq!(clamp_offset(4, 10), 4);
        assert_eq!(clamp_offset(25, 10), 9);
        assert_eq!(clamp_offset(5, 0), 0);
    }

    #[test]
    fn before_offset_drops_newest_items() {
        let data = [1, 2, 3, 4];
        assert_eq!(before_offset(&data, 0), &[1, 2, 3, 4]);
        assert_eq!(before_offset(&data, 3), &[1]);
        assert!(before_offset(&data, 5).is_empty());
    }

    #[test]
    fn slice_method_parses_snake_case() {
        let m: SliceMethod = serde_json::from_str("\"first\"").unwrap();
        assert_eq!(m, SliceMethod::First);
        assert_eq!(SliceMethod::default(), SliceMethod::Last);
    }
}
