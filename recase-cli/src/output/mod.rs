//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::selection::{Outcome, Selection};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single converted selection
    fn format_selection(&mut self, selection: &Selection, outcome: &Outcome) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Converted text, laid out like the input
    #[default]
    Text,
    /// JSON array with one record per selection
    Json,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description for `recase list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Converted text, laid out like the input",
            OutputFormat::Json => "JSON array with one record per selection",
        }
    }

    /// Every supported format
    pub fn all() -> [OutputFormat; 2] {
        [OutputFormat::Text, OutputFormat::Json]
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<'w, W: Write + 'w>(
        &self,
        writer: W,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'w> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        }
    }
}
