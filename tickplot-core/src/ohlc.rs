//! OHLC items and their scaled, cell-space form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::range::Range;
use crate::scale::LinearScale;

/// One open/high/low/close/volume observation.
///
/// Nothing orders the four prices against each other; renderers must cope
/// with any combination, including all four being equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcItem<D = rust_decimal::Decimal> {
    pub timestamp: DateTime<Utc>,
    pub open: D,
    pub high: D,
    pub low: D,
    pub close: D,
    pub volume: D,
}

impl<D: Decimal> OhlcItem<D> {
    /// True when the item closed at or above its open.
    pub fn is_positive(&self) -> bool {
        self.close >= self.open
    }
}

/// Range spanned by the lows and highs of `items`.
pub fn value_range<D: Decimal>(items: &[OhlcItem<D>]) -> Range<D> {
    items
        .iter()
        .fold(Range::unset(), |rng, item| rng.feed(item.low).feed(item.high))
}

/// Range spanned by the volumes of `items`.
pub fn volume_range<D: Decimal>(items: &[OhlcItem<D>]) -> Range<D> {
    Range::from_values(items.iter().map(|item| item.volume))
}

/// An OHLC item converted to cell indices. Lossy; lives for one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledOhlcItem {
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
    pub volume: i64,
}

impl ScaledOhlcItem {
    /// Scales prices with `price` and volume with `volume`.
    pub fn new<D: Decimal>(
        item: &OhlcItem<D>,
        price: &LinearScale<D>,
        volume: &LinearScale<D>,
    ) -> Self {
        Self {
            open: price.value(item.open),
            high: price.value(item.high),
            low: price.value(item.low),
            close: price.value(item.close),
            volume: volume.value(item.volume),
        }
    }

    /// Top of the open/close body.
    pub fn body_top(&self) -> i64 {
        self.open.max(self.close)
    }

    /// Bottom of the open/close body.
    pub fn body_bottom(&self) -> i64 {
        self.open.min(self.close)
    }

    pub fn is_positive(&self) -> bool {
        self.close >= self.open
    }
}

/// Scales every item of `items`.
pub fn scale_items<D: Decimal>(
    items: &[OhlcItem<D>],
    price: &LinearScale<D>,
    volume: &LinearScale<D>,
) -> Vec<ScaledOhlcItem> {
    items
        .iter()
        .map(|item| ScaledOhlcItem::new(item, price, volume))
        .collect()
}
