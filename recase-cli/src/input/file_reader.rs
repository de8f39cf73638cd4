//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::STDIN_SOURCE;

/// Reads conversion sources as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file into a `(source name, content)` pair
    pub fn read_source(path: &Path) -> Result<(String, String)> {
        let content = Self::read_text(path)?;
        log::debug!("Read {} ({} bytes)", path.display(), content.len());

        Ok((path.display().to_string(), content))
    }

    /// Read UTF-8 text from `reader` until end of input
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;

        Ok(content)
    }

    /// Read all of standard input into a `(source name, content)` pair
    pub fn read_stdin() -> Result<(String, String)> {
        let content = Self::read_from(io::stdin().lock())?;
        log::debug!("Read {} bytes from standard input", content.len());

        Ok((STDIN_SOURCE.to_string(), content))
    }
}
