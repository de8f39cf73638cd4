//! Error types for case conversion

use thiserror::Error;

/// Message shown to the user when a conversion has nothing to work with
pub const EMPTY_INPUT_MESSAGE: &str = "Please select a non-empty text to change case!";

/// Conversion errors
///
/// Conversion is deterministic and performs no I/O, so the only way it can
/// fail is by being handed text that contains nothing to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaseError {
    /// Input was empty, or reduced to zero fragments after tokenization
    #[error("Please select a non-empty text to change case!")]
    EmptyInput,
}

/// Error returned when a case name cannot be parsed into a [`CaseKind`]
///
/// [`CaseKind`]: crate::CaseKind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case style '{name}'")]
pub struct ParseCaseKindError {
    /// The rejected name, as given
    pub name: String,
}

impl ParseCaseKindError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, CaseError>;
