//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use recase_core::{CaseConverter, CaseKind};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use crate::selection::{self, Outcome, Selection, SelectionMode};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Text to convert; each argument is converted on its own
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Target case style (see `recase list cases`)
    #[arg(short, long, value_name = "CASE", value_parser = CaseKind::from_str)]
    pub case: Option<CaseKind>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How input is cut into selections
    #[arg(short, long, value_enum)]
    pub selection: Option<SelectionMode>,

    /// Number of threads converting selections (default: one per CPU)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "RECASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress warnings and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging arguments over the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Target case style
    pub case: CaseKind,
    /// Output format
    pub format: OutputFormat,
    /// How sources are cut into selections
    pub mode: SelectionMode,
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Size of the conversion thread pool
    pub threads: usize,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting case conversion");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.resolve_settings(&config)?;
        log::info!(
            "Converting to {} ({} selections, {} output, {} thread(s))",
            settings.case,
            settings.mode.as_str(),
            settings.format.as_str(),
            settings.threads
        );

        let selections = self
            .read_sources()?
            .iter()
            .flat_map(|(source, content)| selection::split(source, content, settings.mode))
            .collect::<Vec<_>>();

        let outcomes =
            convert_selections(&selections, settings.case, settings.mode, settings.threads)?;
        if !self.quiet {
            report_failures(&selections, &outcomes);
        }

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_outcomes(BufWriter::new(file), &settings, &selections, &outcomes)?;
                log::info!("Output written to {}", path.display());
            }
            None => write_outcomes(io::stdout().lock(), &settings, &selections, &outcomes)?,
        }

        check_outcomes(&outcomes)
    }

    /// Merge command line arguments over `config`
    pub fn resolve_settings(&self, config: &CliConfig) -> Result<ConvertSettings> {
        let case = self
            .case
            .or(config.conversion.default_case)
            .ok_or(CliError::MissingCase)?;

        if self.threads == Some(0) {
            anyhow::bail!("Thread count must be greater than 0");
        }
        let threads = match (self.threads, config.performance.worker_threads) {
            (Some(threads), _) => threads,
            (None, 0) => num_cpus::get(),
            (None, configured) => configured,
        };

        Ok(ConvertSettings {
            case,
            format: self.format.unwrap_or(config.output.default_format),
            mode: self.selection.unwrap_or(config.conversion.selection_mode),
            pretty_json: config.output.pretty_json,
            threads,
        })
    }

    /// Collect `(source name, content)` pairs from arguments, files or stdin
    fn read_sources(&self) -> Result<Vec<(String, String)>> {
        let mut sources: Vec<(String, String)> = self
            .text
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("arg#{}", i + 1), text.clone()))
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to convert", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                sources.push(FileReader::read_source(path)?);
                progress.file_completed(&path.display().to_string());
            }
            progress.finish();
        }

        if sources.is_empty() {
            log::debug!("No text or input files given, reading standard input");
            sources.push(FileReader::read_stdin()?);
        }

        Ok(sources)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under a test harness
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Convert every selection, copying blank lines of line mode through untouched
///
/// Selections are spread over a pool of `threads` workers; results keep
/// input order.
pub fn convert_selections(
    selections: &[Selection],
    kind: CaseKind,
    mode: SelectionMode,
    threads: usize,
) -> Result<Vec<Outcome>> {
    let is_blank =
        |selection: &Selection| mode == SelectionMode::Line && selection.text.trim().is_empty();

    let texts: Vec<&str> = selections
        .iter()
        .filter(|selection| !is_blank(selection))
        .map(|selection| selection.text.as_str())
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build worker thread pool")?;
    let converter = CaseConverter::new();
    let results = pool.install(|| {
        texts
            .par_iter()
            .map(|text| converter.change_case(text, kind))
            .collect::<Vec<_>>()
    });
    log::debug!(
        "Converted {} selection(s) on {} thread(s)",
        results.len(),
        pool.current_num_threads()
    );
    let mut results = results.into_iter();

    let outcomes = selections
        .iter()
        .map(|selection| {
            if is_blank(selection) {
                return Outcome::Blank;
            }
            match results.next() {
                Some(Ok(converted)) => Outcome::Converted(converted),
                Some(Err(err)) => Outcome::Failed(err),
                None => Outcome::Blank,
            }
        })
        .collect();

    Ok(outcomes)
}

fn report_failures(selections: &[Selection], outcomes: &[Outcome]) {
    for (selection, outcome) in selections.iter().zip(outcomes) {
        if let Outcome::Failed(err) = outcome {
            log::debug!("{}#{} rejected: {:?}", selection.source, selection.index, err);
            eprintln!(
                "warning: {} (selection {}): {}",
                selection.source, selection.index, err
            );
        }
    }
}

fn write_outcomes<W: Write>(
    writer: W,
    settings: &ConvertSettings,
    selections: &[Selection],
    outcomes: &[Outcome],
) -> Result<()> {
    let mut formatter = settings.format.formatter(writer, settings.pretty_json);
    for (selection, outcome) in selections.iter().zip(outcomes) {
        formatter.format_selection(selection, outcome)?;
    }
    formatter.finish()
}

/// Fail only when there was something to convert and none of it converted
fn check_outcomes(outcomes: &[Outcome]) -> Result<()> {
    let attempted = outcomes
        .iter()
        .filter(|outcome| !matches!(outcome, Outcome::Blank))
        .count();
    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Outcome::Failed(_)))
        .count();

    if attempted > 0 && failed == attempted {
        return Err(CliError::AllSelectionsFailed(failed).into());
    }
    Ok(())
}
