use serde::{Deserialize, Serialize};

use super::enums::{EntryIndicator, Flag};

/// One result row as supplied by the entry or report page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResultEntry {
    pub test_name: String,
    /// Technician-entered text; may be qualitative ("Negative").
    pub value: String,
    pub unit: Option<String>,
    /// Free-text range from the lab-test template, possibly sex-scoped.
    pub reference_range: String,
}

/// A result row after evaluation. Both views come from `flag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedResult {
    pub entry: LabResultEntry,
    pub flag: Flag,
    pub indicator: EntryIndicator,
    pub emphasize: bool,
}
