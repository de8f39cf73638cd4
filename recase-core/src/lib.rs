//! Text case conversion
//!
//! Given a piece of text and a [`CaseKind`], the converter splits the text
//! into word fragments, normalizes the casing of each fragment and joins them
//! back with the separator of the requested style. Sentence case is the one
//! exception: it is applied directly over the character stream so terminal
//! punctuation stays in place.
//!
//! # Architecture
//!
//! - **Domain layer**: character classes, the tokenizer, the recombiner and
//!   the sentence segmenter
//! - **Converter**: dispatch on the case style and batch conversion
//!
//! Conversion is pure and performs no I/O and no logging. Hosts (an editor
//! command, the `recase` CLI) supply the text and decide how to report
//! failures.
//!
//! # Example
//!
//! ```rust
//! use recase_core::{CaseConverter, CaseError, CaseKind};
//!
//! let converter = CaseConverter::new();
//!
//! assert_eq!(
//!     converter.change_case("my_variable_name", CaseKind::CamelCase).unwrap(),
//!     "myVariableName"
//! );
//! assert_eq!(
//!     converter.change_case("hello world.this is me.", CaseKind::SentenceCase).unwrap(),
//!     "Hello world. This is me."
//! );
//! assert_eq!(
//!     converter.change_case("", CaseKind::SnakeCase),
//!     Err(CaseError::EmptyInput)
//! );
//! ```

pub mod case_kind;
pub mod converter;
pub mod domain;
pub mod error;

pub use case_kind::CaseKind;
pub use converter::{defaults, CaseConverter};
pub use error::{CaseError, ParseCaseKindError, Result, EMPTY_INPUT_MESSAGE};

/// Convert `text` with a default [`CaseConverter`]
pub fn change_case(text: &str, kind: CaseKind) -> Result<String> {
    CaseConverter::new().change_case(text, kind)
}

/// Convert every selection independently with a default [`CaseConverter`]
pub fn convert_all<S>(selections: &[S], kind: CaseKind) -> Vec<Result<String>>
where
    S: AsRef<str> + Sync,
{
    CaseConverter::new().convert_all(selections, kind)
}
