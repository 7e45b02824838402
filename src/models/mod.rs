pub mod enums;
pub mod lab;

pub use enums::{EntryIndicator, Flag, Sex};
pub use lab::{FlaggedResult, LabResultEntry};

use thiserror::Error;

/// Errors from parsing model values supplied by collaborators.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
