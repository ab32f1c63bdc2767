//! Tickplot Core — the numeric half of the chart engine.
//!
//! This crate turns decimal data into terminal cell coordinates:
//! - `Decimal` trait with `rust_decimal` and `f64` backends
//! - `Range` fold of observed minimum/maximum
//! - `LinearScale` decimal↔cell mapping with exact truncation rules
//! - OHLC items, scaled items and their value/volume ranges
//! - Windowing of series that do not fit the screen
//! - JSON/CSV data loading

pub mod data;
pub mod decimal;
pub mod error;
pub mod ohlc;
pub mod range;
pub mod scale;
pub mod window;

pub use decimal::Decimal;
pub use error::{DataError, PlotError};
pub use ohlc::{scale_items, value_range, volume_range, OhlcItem, ScaledOhlcItem};
pub use range::Range;
pub use rust_decimal;
pub use scale::LinearScale;
pub use window::{before_offset, capacity, clamp_offset, window, SliceMethod};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the value types can cross into a UI callback thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Range<rust_decimal::Decimal>>();
        require_sync::<Range<rust_decimal::Decimal>>();
        require_send::<LinearScale<rust_decimal::Decimal>>();
        require_sync::<LinearScale<rust_decimal::Decimal>>();
        require_send::<OhlcItem>();
        require_sync::<OhlcItem>();
        require_send::<LinearScale<f64>>();
        require_sync::<LinearScale<f64>>();
    }
}
