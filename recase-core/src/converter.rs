//! Case converter entry point

use crate::domain::{sentence, tokenize, BoundaryRule, Recombiner};
use crate::error::{CaseError, Result};
use crate::CaseKind;

/// Default tuning constants
pub mod defaults {
    /// Batches with at least this many selections are converted in parallel
    pub const PARALLEL_THRESHOLD: usize = 256;
}

/// Converts text between case styles
///
/// The converter holds no state; every call only reads its input, so a single
/// value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseConverter;

impl CaseConverter {
    /// Create a new converter
    pub fn new() -> Self {
        Self
    }

    /// Convert `text` to the `kind` case style
    ///
    /// Fails with [`CaseError::EmptyInput`] when `text` is empty, or when it
    /// holds nothing the selected style can work with (only delimiters for the
    /// tokenizing styles, only whitespace for sentence case).
    pub fn change_case(&self, text: &str, kind: CaseKind) -> Result<String> {
        if text.is_empty() {
            return Err(CaseError::EmptyInput);
        }

        if let Some(recombiner) = Recombiner::for_kind(kind) {
            let fragments = tokenize(text, BoundaryRule::for_kind(kind));
            if fragments.is_empty() {
                return Err(CaseError::EmptyInput);
            }
            return Ok(recombiner.recombine(&fragments));
        }

        match kind {
            CaseKind::Uppercase => Ok(text.to_uppercase()),
            CaseKind::LowerCase => Ok(text.to_lowercase()),
            _ => {
                let result = sentence::segment(text);
                if result.is_empty() {
                    Err(CaseError::EmptyInput)
                } else {
                    Ok(result)
                }
            }
        }
    }

    /// Convert every selection independently
    ///
    /// Results are returned in input order. A failing selection only affects
    /// its own slot; the rest of the batch is still converted.
    pub fn convert_all<S>(&self, selections: &[S], kind: CaseKind) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        if selections.len() >= defaults::PARALLEL_THRESHOLD {
            use rayon::prelude::*;

            return selections
                .par_iter()
                .map(|selection| self.change_case(selection.as_ref(), kind))
                .collect();
        }

        selections
            .iter()
            .map(|selection| self.change_case(selection.as_ref(), kind))
            .collect()
    }
}
