//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Comment marker to put in the template
    #[arg(short = 'M', long, value_name = "MARKER", default_value = "#")]
    pub marker: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to suit your project");
        println!("2. Validate your configuration:");
        println!("   shdoc validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   shdoc process script.sh --config {} -o script.html",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# shdoc configuration
#
# Values given on the command line take precedence over this file.

[parser]
# Line-comment marker. A line whose trimmed text starts with the marker
# followed by a space is documentation; a bare marker inside a documentation
# block is a paragraph break.
marker = {marker:?}

[output]
# One of: html, json, weave, tangle
default_format = "html"

# Custom HTML template (Jinja syntax). Values: title, content, language,
# stylesheet and the metadata map, e.g. {{{{ metadata.author }}}}.
# template = "templates/page.html"

# Fixed document title instead of the input file name.
# title = "Project scripts"

[languages]
# File extension to value of the template "language" key.
".sh" = "bash"
".py" = "python"
".rb" = "ruby"
"#,
            marker = self.marker
        )
    }
}
