//! Comment marker recognition

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Default marker, matching shell, Python, Ruby and friends
pub const DEFAULT_MARKER: &str = "#";

/// The line-comment marker that introduces documentation
///
/// All matching is done against a line that has already been trimmed of
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentMarker {
    marker: String,
}

impl CommentMarker {
    /// Create a marker, rejecting empty markers and markers with whitespace
    pub fn new(marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            return Err(Error::InvalidMarker(marker));
        }
        Ok(Self { marker })
    }

    /// The marker text
    pub fn as_str(&self) -> &str {
        &self.marker
    }

    /// If `trimmed` is a documentation line (marker followed by a space),
    /// return its content with the marker and exactly one space removed.
    pub fn strip_doc<'a>(&self, trimmed: &'a str) -> Option<&'a str> {
        trimmed.strip_prefix(self.marker.as_str())?.strip_prefix(' ')
    }

    /// Whether `trimmed` is the marker with nothing after it
    pub fn is_bare(&self, trimmed: &str) -> bool {
        trimmed == self.marker
    }

    /// Rebuild the source text of a documentation string.
    ///
    /// Empty strings come from bare marker lines and map back to the bare
    /// marker.
    pub fn restore(&self, doc: &str) -> String {
        if doc.is_empty() {
            self.marker.clone()
        } else {
            format!("{} {}", self.marker, doc)
        }
    }
}

impl Default for CommentMarker {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl FromStr for CommentMarker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CommentMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marker)
    }
}
