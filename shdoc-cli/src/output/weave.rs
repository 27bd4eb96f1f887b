//! Weave formatter: documentation without code

use super::OutputFormatter;
use anyhow::Result;
use shdoc_core::Chunk;
use std::io::Write;

/// Writes each chunk's documentation followed by a newline
pub struct WeaveFormatter<W: Write> {
    writer: W,
}

impl<W: Write> WeaveFormatter<W> {
    /// Create a new weave formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for WeaveFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        writeln!(self.writer, "{}", chunk.doc_text())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
