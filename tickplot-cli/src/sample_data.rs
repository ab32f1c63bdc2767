//! Seeded sample data for demos and snapshots.
//!
//! Prices follow a random walk with a small drift; each candle's wicks extend
//! a random distance beyond its body. Volumes are noisy around a base level
//! and grow with the size of the move.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tickplot_core::rust_decimal::Decimal;
use tickplot_core::OhlcItem;

const START_PRICE: f64 = 100.0;
const DRIFT: f64 = 0.0004;
const VOLATILITY: f64 = 0.015;
const BASE_VOLUME: f64 = 1_000_000.0;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn price(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(2)
}

/// `count` daily candles from 2022-01-03.
pub fn ohlc_items(count: usize, seed: u64) -> Vec<OhlcItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = start();
    let mut close = START_PRICE;

    (0..count)
        .map(|i| {
            let open = close * (1.0 + rng.gen_range(-0.3..0.3) * VOLATILITY);
            let ret = DRIFT + rng.gen_range(-1.0..1.0) * VOLATILITY;
            close = (open * (1.0 + ret)).max(0.01);

            let top = open.max(close);
            let bottom = open.min(close);
            let high = top * (1.0 + rng.gen_range(0.0..VOLATILITY));
            let low = (bottom * (1.0 - rng.gen_range(0.0..VOLATILITY))).max(0.0);

            let volume = BASE_VOLUME
                * (1.0 + ret.abs() * 20.0)
                * rng.gen_range(0.5..1.5);

            OhlcItem {
                timestamp: start + Duration::days(i as i64),
                open: price(open),
                high: price(high),
                low: price(low),
                close: price(close),
                volume: Decimal::from(volume.round() as i64),
            }
        })
        .collect()
}

/// `count` values of a noisy sine wave.
pub fn values(count: usize, seed: u64) -> Vec<Decimal> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let wave = (i as f64 * 0.15).sin() * 10.0;
            price(50.0 + wave + rng.gen_range(-1.5..1.5))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_data() {
        assert_eq!(ohlc_items(50, 7), ohlc_items(50, 7));
        assert_eq!(values(50, 7), values(50, 7));
        assert_ne!(values(50, 7), values(50, 8));
    }

    #[test]
    fn candles_are_well_formed() {
        for item in ohlc_items(500, 42) {
            assert!(item.low <= item.open.min(item.close));
            assert!(item.high >= item.open.max(item.close));
            assert!(item.volume > Decimal::ZERO);
        }
    }

    #[test]
    fn timestamps_are_daily() {
        let items = ohlc_items(3, 1);
        assert_eq!(items[1].timestamp - items[0].timestamp, Duration::days(1));
        assert_eq!(items[0].timestamp, Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap());
    }
}
