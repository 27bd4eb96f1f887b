//! Comment/code segmentation for literate documentation
//!
//! This crate splits source files with interleaved line comments into an
//! ordered sequence of [`Chunk`]s, each pairing a block of prose with the
//! code that follows it. It is the engine behind the `shdoc` command line
//! tool, which renders chunks as HTML, JSON, or plain text.
//!
//! The crate only classifies and groups lines. It never looks inside the
//! prose (no markdown) or the code (no highlighting).
//!
//! # Example
//!
//! ```rust
//! use shdoc_core::segment;
//!
//! let script = "# Say hello.\necho hello\n";
//! let chunks: Vec<_> = segment(script).collect();
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].doc, vec!["Say hello."]);
//! assert_eq!(chunks[0].code, vec!["echo hello\n"]);
//! ```
//!
//! Reading from any [`std::io::BufRead`] works the same way, with I/O
//! errors surfacing as the iterator's error item:
//!
//! ```rust
//! use shdoc_core::{segment_reader, CommentMarker};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("// Entry point.\nfn main() {}\n");
//! let marker = CommentMarker::new("//").unwrap();
//! for chunk in segment_reader(input, marker) {
//!     let chunk = chunk.unwrap();
//!     assert_eq!(chunk.doc_text(), "Entry point.");
//! }
//! ```

pub mod chunk;
pub mod error;
pub mod marker;
pub mod segmenter;
pub mod source;

pub use chunk::Chunk;
pub use error::{Error, Result};
pub use marker::{CommentMarker, DEFAULT_MARKER};
pub use segmenter::{segment, segment_reader, segment_str, Segmenter};
pub use source::LineSource;
