use serde::{Deserialize, Serialize};

use crate::models::{EntryIndicator, Flag};

impl From<Flag> for EntryIndicator {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::None => EntryIndicator::None,
            Flag::Normal => EntryIndicator::Normal,
            Flag::High => EntryIndicator::High,
            Flag::Low => EntryIndicator::Low,
        }
    }
}

/// Entry page: colour state for the result input.
pub fn entry_indicator(flag: Flag) -> EntryIndicator {
    EntryIndicator::from(flag)
}

/// Report page: only High and Low print in bold.
pub fn emphasize(flag: Flag) -> bool {
    flag.is_abnormal()
}

/// A printed result value and whether it renders emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCell {
    pub text: String,
    pub emphasize: bool,
}

pub fn report_cell(value: &str, flag: Flag) -> ReportCell {
    ReportCell {
        text: value.trim().to_string(),
        emphasize: emphasize(flag),
    }
}
