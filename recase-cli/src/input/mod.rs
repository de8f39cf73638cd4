//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Name used for standard input in warnings and JSON records
pub const STDIN_SOURCE: &str = "<stdin>";
