//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use recase_core::CaseKind;

use crate::output::OutputFormat;

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text to another case style
    #[command(visible_alias = "c")]
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available case styles
    Cases,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Cases => {
                let mut listing = String::from("Available case styles:\n");
                for kind in CaseKind::ALL {
                    listing.push_str(&format!("  {:<10} {}\n", kind.code(), kind.label()));
                }
                listing
            }
            ListCommands::Formats => {
                let mut listing = String::from("Available output formats:\n");
                for format in OutputFormat::all() {
                    listing.push_str(&format!(
                        "  {:<10} {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
                listing
            }
        }
    }
}
