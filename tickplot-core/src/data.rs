//! Data loading — OHLC items and plain value series from disk.
//!
//! Formats:
//! - OHLC JSON: an array of `{timestamp, open, high, low, close, volume}`
//! - OHLC CSV: header `timestamp,open,high,low,close,volume`, RFC 3339 timestamps
//! - Values JSON: an array of numbers or numeric strings
//! - Values text: one decimal per line; blank lines and `#` comments skipped

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::decimal::Decimal;
use crate::error::DataError;
use crate::ohlc::OhlcItem;

/// Raw CSV row; prices stay text until parsed by the target backend.
#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: DateTime<Utc>,
    open: String,
    high: String,
    low: String,
    close: String,
    volume: String,
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn read(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_decimal<D: FromStr>(path: &Path, line: usize, value: &str) -> Result<D, DataError> {
    value.trim().parse().map_err(|_| DataError::InvalidDecimal {
        path: path.to_path_buf(),
        line,
        value: value.to_string(),
    })
}

/// Loads OHLC items from a `.csv` file or, for any other extension, JSON.
pub fn load_ohlc<D>(path: &Path) -> Result<Vec<OhlcItem<D>>, DataError>
where
    D: Decimal + FromStr + DeserializeOwned,
{
    if has_extension(path, "csv") {
        load_ohlc_csv(path)
    } else {
        let content = read(path)?;
        serde_json::from_str(&content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn load_ohlc_csv<D>(path: &Path) -> Result<Vec<OhlcItem<D>>, DataError>
where
    D: Decimal + FromStr,
{
    let csv_err = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let row: CsvRow = record.deserialize(Some(&headers)).map_err(csv_err)?;

        items.push(OhlcItem {
            timestamp: row.timestamp,
            open: parse_decimal(path, line, &row.open)?,
            high: parse_decimal(path, line, &row.high)?,
            low: parse_decimal(path, line, &row.low)?,
            close: parse_decimal(path, line, &row.close)?,
            volume: parse_decimal(path, line, &row.volume)?,
        });
    }
    Ok(items)
}

/// Loads a value series from a `.json` array or a one-per-line text file.
pub fn load_values<D>(path: &Path) -> Result<Vec<D>, DataError>
where
    D: Decimal + FromStr + DeserializeOwned,
{
    let content = read(path)?;

    if has_extension(path, "json") {
        return serde_json::from_str(&content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        });
    }

    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| parse_decimal(path, n, line))
        .collect()
}
