//! JSON output formatter

use super::OutputFormatter;
use crate::selection::{Outcome, Selection};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs selections as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<SelectionRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SelectionRecord {
    /// Where the selection came from
    pub source: String,
    /// 1-based position within the source
    pub index: usize,
    /// The original text
    pub input: String,
    /// The converted text, absent when conversion failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The conversion error, absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_selection(&mut self, selection: &Selection, outcome: &Outcome) -> Result<()> {
        let (output, error) = match outcome {
            Outcome::Converted(text) => (Some(text.clone()), None),
            Outcome::Failed(err) => (None, Some(err.to_string())),
            Outcome::Blank => return Ok(()),
        };

        self.records.push(SelectionRecord {
            source: selection.source.clone(),
            index: selection.index,
            input: selection.text.clone(),
            output,
            error,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
