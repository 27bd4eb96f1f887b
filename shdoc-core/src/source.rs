//! Line sources that keep their terminators

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, terminators included
///
/// Unlike [`BufRead::lines`], the trailing `\n` (or `\r\n`) stays on each
/// line, so code can be reproduced byte for byte. The last line may lack a
/// terminator. Read failures, including invalid UTF-8, are yielded as-is.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(line)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
