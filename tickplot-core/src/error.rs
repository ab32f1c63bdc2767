//! Error types shared by the plotting crates.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid plot configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("glyph ramp must contain at least one glyph")]
    EmptyGlyphRamp,

    #[error("volume fraction {0} is outside 0..=1")]
    InvalidVolumeFraction(f64),

    #[error("ohlc rune set needs exactly 12 glyphs, got {0}")]
    InvalidOhlcRunes(usize),
}

/// Failure while loading a data file.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}:{line}: cannot parse {value:?} as a decimal")]
    InvalidDecimal {
        path: PathBuf,
        line: usize,
        value: String,
    },
}
