//! Test helpers for building data and reading rendered buffers

use chrono::{TimeZone, Utc};
use ratatui::buffer::Buffer;
use tickplot_core::rust_decimal::Decimal;
use tickplot_core::OhlcItem;

pub fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Daily item on 2020-01-`day`.
pub fn item(day: u32, o: i64, h: i64, l: i64, c: i64, v: i64) -> OhlcItem {
    OhlcItem {
        timestamp: Utc.with_ymd_and_hms(2020, 1, day, 0, 0, 0).unwrap(),
        open: d(o),
        high: d(h),
        low: d(l),
        close: d(c),
        volume: d(v),
    }
}

/// The five-candle series used by the golden frame tests.
pub fn sample_items() -> Vec<OhlcItem> {
    vec![
        item(1, 10, 30, 5, 15, 500),
        item(2, 15, 15, 15, 15, 750),
        item(3, 15, 20, 5, 15, 200),
        item(4, 20, 20, 10, 10, 300),
        item(5, 15, 20, 5, 15, 1000),
    ]
}

/// Buffer rows as strings with trailing spaces trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}
