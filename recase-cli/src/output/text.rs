//! Plain text output formatter

use super::OutputFormatter;
use crate::selection::{Outcome, Selection};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - writes every selection's replacement followed by
/// its original line ending
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_selection(&mut self, selection: &Selection, outcome: &Outcome) -> Result<()> {
        write!(
            self.writer,
            "{}{}",
            outcome.replacement(selection),
            selection.line_ending
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
