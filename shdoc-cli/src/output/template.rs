//! Jinja-style HTML page templates
//!
//! Templates are rendered with `minijinja`. The page receives `content`,
//! `title`, `language`, `stylesheet` and the `metadata` map; undefined
//! values render as the empty string and nothing is auto-escaped, so the
//! chunk markup in `content` is inserted as-is.

use crate::error::CliError;
use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Template shipped with the binary
const BUNDLED_TEMPLATE: &str = include_str!("../../templates/template.html");

/// Values available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub title: String,
    /// `none` when no extension mapping or fallback applies
    pub language: Option<String>,
    pub stylesheet: Option<String>,
    pub metadata: BTreeMap<String, String>,
    /// Rendered chunks, filled in by the HTML formatter
    pub content: String,
}

/// A loaded HTML template
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Create a template from its text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The default page layout
    pub fn bundled() -> Self {
        Self::new(BUNDLED_TEMPLATE)
    }

    /// Load a template from disk, rejecting files that do not parse
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::TemplateError(format!(
                "template not found: {}",
                path.display()
            ))
            .into());
        }
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;

        if let Err(e) = check_syntax(&source) {
            return Err(CliError::TemplateError(format!("{}: {e:#}", path.display())).into());
        }
        Ok(Self::new(source))
    }

    /// Load `path` if given, otherwise use the bundled template
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::bundled()),
        }
    }

    /// Render the page
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let env = environment();
        let page = env
            .template_from_str(&self.source)
            .and_then(|template| template.render(context))
            .map_err(|e| CliError::TemplateError(format!("{e:#}")))?;
        Ok(page)
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

fn check_syntax(source: &str) -> Result<(), minijinja::Error> {
    let env = environment();
    let compiled = env.template_from_str(source);
    compiled.map(|_| ())
}
