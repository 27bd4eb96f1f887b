//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn a commented script into HTML, JSON, documentation or code
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => {
                let mut out = String::from("Available output formats:\n");
                for format in OutputFormat::all() {
                    out.push_str(&format!(
                        "  {:<8} {}\n",
                        format.as_str(),
                        format.description()
                    ));
                }
                out
            }
        }
    }
}
