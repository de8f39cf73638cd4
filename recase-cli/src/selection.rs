//! Selections: the units of text handed to the converter
//!
//! An editor converts each selected range separately. The CLI mirrors that by
//! cutting its sources into selections, either one per source or one per
//! line, and converting each of them on its own.

use recase_core::CaseError;
use serde::{Deserialize, Serialize};

/// How a source is cut into selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// The whole source is one selection
    #[default]
    Whole,
    /// Every line is its own selection
    Line,
}

impl SelectionMode {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Whole => "whole",
            SelectionMode::Line => "line",
        }
    }
}

/// One piece of text to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Where the text came from (`<stdin>`, a path, `arg#1`)
    pub source: String,
    /// 1-based position of the selection within its source
    pub index: usize,
    /// The selected text, without its line ending
    pub text: String,
    /// Line ending written back after the converted text
    ///
    /// The last line of a source gets `\n` when it had none, so consecutive
    /// sources never run into each other.
    pub line_ending: &'static str,
}

impl Selection {
    /// Create a selection terminated by a newline
    pub fn new(source: impl Into<String>, index: usize, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            index,
            text: text.into(),
            line_ending: "\n",
        }
    }
}

/// Result of converting one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The converted text
    Converted(String),
    /// The converter rejected the selection; the original text is kept
    Failed(CaseError),
    /// A blank line in line mode, copied through without conversion
    Blank,
}

impl Outcome {
    /// Text that replaces the selection in the output
    pub fn replacement<'a>(&'a self, selection: &'a Selection) -> &'a str {
        match self {
            Outcome::Converted(text) => text,
            Outcome::Failed(_) | Outcome::Blank => &selection.text,
        }
    }
}

/// Cut `content` into selections
pub fn split(source: &str, content: &str, mode: SelectionMode) -> Vec<Selection> {
    match mode {
        SelectionMode::Whole => {
            let (text, _) = strip_line_ending(content);
            vec![Selection::new(source, 1, text)]
        }
        SelectionMode::Line => content
            .split_inclusive('\n')
            .enumerate()
            .map(|(i, line)| {
                let (text, line_ending) = strip_line_ending(line);
                Selection {
                    source: source.to_string(),
                    index: i + 1,
                    text: text.to_string(),
                    line_ending,
                }
            })
            .collect(),
    }
}

fn strip_line_ending(line: &str) -> (&str, &'static str) {
    if let Some(text) = line.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = line.strip_suffix('\n') {
        (text, "\n")
    } else {
        (line, "\n")
    }
}
