use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parsed form of a (sex-scoped, normalized) reference range segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeShape {
    /// Text verdict such as "negative"; never numerically flagged.
    Qualitative,
    /// `<140` or `<=140`.
    LessThan { max: f64 },
    /// `>5` or `>=5`.
    GreaterThan { min: f64 },
    /// `70-99`. Bounds are stored in ascending order.
    Bounded { min: f64, max: f64 },
}

/// Flagging engine errors.
///
/// Evaluation itself is fail-open and never errors; these cover loading
/// the engine's configuration.
#[derive(Error, Debug)]
pub enum FlagError {
    #[error("Failed to read flagging config {0}: {1}")]
    ConfigRead(String, String),

    #[error("Failed to parse flagging config: {0}")]
    ConfigParse(String),

    #[error("Flagging config contains an empty qualitative keyword")]
    EmptyKeyword,
}
