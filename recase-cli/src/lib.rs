//! recase CLI library
//!
//! This library provides the command-line interface for the recase
//! case conversion library.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod selection;

pub use error::{CliError, CliResult};
