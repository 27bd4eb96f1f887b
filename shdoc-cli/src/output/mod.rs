//! Output formatting module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shdoc_core::Chunk;
use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., render the template, close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Writer handed to formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML page with documentation beside the code
    #[default]
    Html,
    /// JSON array of [code, doc] pairs
    Json,
    /// Documentation only
    Weave,
    /// Code only
    Tangle,
}

impl OutputFormat {
    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Weave => "weave",
            OutputFormat::Tangle => "tangle",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML page with documentation beside the code",
            OutputFormat::Json => "JSON array of [code, doc] pairs",
            OutputFormat::Weave => "documentation text only",
            OutputFormat::Tangle => "code only, documentation comments removed",
        }
    }

    /// Every format, in display order
    pub fn all() -> [OutputFormat; 4] {
        [
            OutputFormat::Html,
            OutputFormat::Json,
            OutputFormat::Weave,
            OutputFormat::Tangle,
        ]
    }
}

/// Where formatted output goes
///
/// File output is staged in an anonymous temporary file and copied over the
/// destination by [`OutputTarget::commit`], so a run that fails partway
/// leaves any existing file untouched.
pub enum OutputTarget {
    Stdout,
    File { path: PathBuf, staging: File },
}

impl OutputTarget {
    /// Prepare output to `path`, or stdout when no path is given
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(OutputTarget::Stdout);
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                anyhow::bail!(
                    "Failed to create output file: {} (no such directory)",
                    path.display()
                );
            }
        }

        let staging = tempfile::tempfile().context("Failed to create staging file")?;
        log::debug!("Staging output for {}", path.display());
        Ok(OutputTarget::File {
            path: path.to_path_buf(),
            staging,
        })
    }

    /// Writer handed to a formatter
    pub fn writer(&self) -> Result<OutputWriter> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
            OutputTarget::File { staging, .. } => {
                let file = staging.try_clone().context("Failed to open staging file")?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    /// Move staged output into place; call after the formatter has finished
    pub fn commit(self) -> Result<()> {
        let OutputTarget::File { path, mut staging } = self else {
            return Ok(());
        };

        staging.seek(SeekFrom::Start(0))?;
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        io::copy(&mut staging, &mut file)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

pub mod html;
pub mod json;
pub mod tangle;
pub mod template;
pub mod weave;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use tangle::TangleFormatter;
pub use template::Template;
pub use weave::WeaveFormatter;
