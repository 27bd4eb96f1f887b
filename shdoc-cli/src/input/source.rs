//! Input selection: a named file or standard input

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Display name used for standard input
pub const STDIN_NAME: &str = "<stdin>";

/// Where the script to document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from standard input
    Stdin,
    /// Read from a file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name of the input as given on the command line
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Final path component, or the full name when there is none
    pub fn short_name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.name()),
        }
    }

    /// Open the input for line-by-line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                let file = File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                log::debug!("Reading {}", path.display());
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }
}

impl From<&Path> for InputSource {
    fn from(path: &Path) -> Self {
        InputSource::File(path.to_path_buf())
    }
}
