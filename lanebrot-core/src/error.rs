//! Error types for region configuration and output grids.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("expected {expected} region parameters, got {actual}")]
    ParamCount { expected: usize, actual: usize },

    #[error("iteration limit {limit} exceeds the exact lane counter range ({max})")]
    IterationLimitTooLarge { limit: f32, max: u32 },

    #[error("invalid region JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid shape {actual:?} does not match {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
