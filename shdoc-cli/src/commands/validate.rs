//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let outcome = CliConfig::load(&self.config)
            .and_then(|config| config.validate().map(|()| config).map_err(Into::into));

        match outcome {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Comment marker: {}", config.parser.marker);
                println!("  Default format: {}", config.output.default_format.as_str());
                match &config.output.template {
                    Some(template) => println!("  Template: {}", template.display()),
                    None => println!("  Template: (bundled)"),
                }
                println!("  Extension mappings: {}", config.languages.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
