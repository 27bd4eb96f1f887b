//! Resolution of the template `language` value
//!
//! Templates can use `language` to switch on syntax highlighting for the
//! code column (for example with highlight.js or prism). The value comes
//! from the first extension mapping that matches the input name, falling
//! back to `--language`.

/// Extension mappings plus a fallback language
#[derive(Debug, Clone, Default)]
pub struct LanguageResolver {
    mappings: Vec<(String, String)>,
    fallback: Option<String>,
}

impl LanguageResolver {
    /// Create a resolver with an optional fallback language
    pub fn new(fallback: Option<String>) -> Self {
        Self {
            mappings: Vec::new(),
            fallback,
        }
    }

    /// Append mappings; earlier mappings take precedence
    pub fn with_mappings<I>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.mappings.extend(mappings);
        self
    }

    /// Language for an input name
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|(ext, _)| !ext.is_empty() && name.ends_with(ext.as_str()))
            .map(|(_, language)| language.as_str())
            .or(self.fallback.as_deref())
    }
}
