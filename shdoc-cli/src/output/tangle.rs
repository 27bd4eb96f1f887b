//! Tangle formatter: code without documentation comments

use super::OutputFormatter;
use anyhow::Result;
use shdoc_core::Chunk;
use std::io::Write;

/// Writes each chunk's code lines verbatim
pub struct TangleFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TangleFormatter<W> {
    /// Create a new tangle formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TangleFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        for line in &chunk.code {
            self.writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
