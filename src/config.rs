use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::flagging::types::FlagError;

/// Application-level constants
pub const APP_NAME: &str = "rangeflag";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "rangeflag=info"
}

/// Range phrases that denote a qualitative verdict. A segment containing any
/// of these is never numerically flagged.
pub const DEFAULT_QUALITATIVE_KEYWORDS: &[&str] = &[
    "negative",
    "non-reactive",
    "no growth",
    "adequate",
    "normal",
    "report-based",
];

/// Tunables for the flagging engine (loaded from `flagging.json` when a lab
/// ships its own keyword list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggingConfig {
    /// Lower-cased substrings marking a qualitative range.
    pub qualitative_keywords: Vec<String>,
}

impl Default for FlaggingConfig {
    fn default() -> Self {
        Self {
            qualitative_keywords: DEFAULT_QUALITATIVE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl FlaggingConfig {
    /// Load a config from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, FlagError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| FlagError::ConfigRead(path.display().to_string(), e.to_string()))?;
        Self::from_json(&json)
    }

    /// Parse a config from JSON text. Keywords are trimmed and lower-cased.
    pub fn from_json(json: &str) -> Result<Self, FlagError> {
        let raw: FlaggingConfig =
            serde_json::from_str(json).map_err(|e| FlagError::ConfigParse(e.to_string()))?;

        let mut qualitative_keywords = Vec::with_capacity(raw.qualitative_keywords.len());
        for keyword in raw.qualitative_keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(FlagError::EmptyKeyword);
            }
            qualitative_keywords.push(keyword);
        }

        tracing::debug!(
            keywords = qualitative_keywords.len(),
            "Loaded flagging config"
        );

        Ok(Self {
            qualitative_keywords,
        })
    }
}
