//! HTML output formatter
//!
//! Each chunk becomes an `outer` div holding a `doc` column (markdown
//! rendered to HTML) and a `code` column (escaped, inside `<pre><code>`).
//! Side-by-side layout is left to the template's CSS.

use super::template::{Template, TemplateContext};
use super::OutputFormatter;
use anyhow::Result;
use pulldown_cmark::{html, Parser};
use shdoc_core::Chunk;
use std::io::Write;

/// HTML formatter - collects chunk markup and renders the page at the end
pub struct HtmlFormatter<W: Write> {
    writer: W,
    template: Template,
    context: TemplateContext,
    content: String,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    ///
    /// `context.content` is replaced by the rendered chunks in
    /// [`OutputFormatter::finish`].
    pub fn new(writer: W, template: Template, context: TemplateContext) -> Self {
        Self {
            writer,
            template,
            context,
            content: String::new(),
        }
    }
}

/// Markup for a single chunk
pub fn render_chunk(chunk: &Chunk) -> String {
    let doc = markdown_to_html(&chunk.doc_text());
    let code: String = chunk.code.iter().map(|line| escape_html(line)).collect();

    [
        "<div class=\"outer\">",
        "<div class=\"doc\">",
        doc.as_str(),
        "</div>",
        "<div class=\"code\">",
        "<pre><code>",
        code.as_str(),
        "</code></pre>",
        "</div>",
        "</div>",
    ]
    .join("\n")
}

/// Render markdown prose to an HTML fragment
pub fn markdown_to_html(text: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(text));
    out.truncate(out.trim_end().len());
    out
}

/// Escape `&`, `<` and `>` so code shows up literally
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.content.push_str(&render_chunk(chunk));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.context.content = std::mem::take(&mut self.content);
        let page = self.template.render(&self.context)?;
        self.writer.write_all(page.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
