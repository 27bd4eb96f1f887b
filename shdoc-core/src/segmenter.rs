//! Comment/code segmentation
//!
//! The segmenter walks a line source once and groups lines into
//! [`Chunk`]s. A line whose trimmed text starts with the marker and a
//! space is documentation; a bare marker is a blank documentation line
//! once some documentation has been collected; everything else is code.
//!
//! A chunk is emitted when a new documentation run starts and something
//! has accumulated since the previous emission. When the source runs dry
//! one terminal chunk is emitted unconditionally, possibly empty.

use crate::chunk::Chunk;
use crate::marker::CommentMarker;
use crate::source::LineSource;
use std::convert::Infallible;
use std::io::BufRead;
use std::iter::FusedIterator;
use std::mem;

/// Scanner position relative to documentation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Last classified line was code, or nothing has been read yet
    InCode,
    /// Inside a run opened by a `marker + " "` line
    InDoc,
}

/// Lazy chunk producer over a fallible line source
///
/// Each call to `next` reads only as many lines as it takes to close the
/// current chunk. Errors from the source are passed through unchanged and
/// end the iteration.
#[derive(Debug)]
pub struct Segmenter<I> {
    lines: I,
    marker: CommentMarker,
    state: ScanState,
    code: Vec<String>,
    doc: Vec<String>,
    finished: bool,
}

impl<I> Segmenter<I> {
    /// Segment `lines` using the default `#` marker
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::with_marker(lines, CommentMarker::default())
    }

    /// Segment `lines` using a custom marker
    pub fn with_marker<T>(lines: T, marker: CommentMarker) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            marker,
            state: ScanState::InCode,
            code: Vec::new(),
            doc: Vec::new(),
            finished: false,
        }
    }

    /// Classify one line. Returns a chunk when the line closes one.
    fn push_line(&mut self, line: String) -> Option<Chunk> {
        let trimmed = line.trim();

        if let Some(text) = self.marker.strip_doc(trimmed) {
            let text = text.to_string();
            let flushed = match self.state {
                ScanState::InDoc => None,
                ScanState::InCode => {
                    self.state = ScanState::InDoc;
                    self.take_pending()
                }
            };
            self.doc.push(text);
            return flushed;
        }

        // Rule only applies once this run has some prose; a leading bare
        // marker stays code.
        if !self.doc.is_empty() && self.marker.is_bare(trimmed) {
            self.doc.push(String::new());
            return None;
        }

        self.state = ScanState::InCode;
        self.code.push(line);
        None
    }

    fn take_pending(&mut self) -> Option<Chunk> {
        if self.code.is_empty() && self.doc.is_empty() {
            return None;
        }
        Some(self.take_chunk())
    }

    fn take_chunk(&mut self) -> Chunk {
        Chunk::new(mem::take(&mut self.code), mem::take(&mut self.doc))
    }
}

impl<I, L, E> Iterator for Segmenter<I>
where
    I: Iterator<Item = Result<L, E>>,
    L: Into<String>,
{
    type Item = Result<Chunk, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        #[allow(clippy::while_let_on_iterator)]
        while let Some(item) = self.lines.next() {
            match item {
                Ok(line) => {
                    if let Some(chunk) = self.push_line(line.into()) {
                        log::trace!(
                            "chunk: {} code lines, {} doc lines",
                            chunk.code.len(),
                            chunk.doc.len()
                        );
                        return Some(Ok(chunk));
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }

        self.finished = true;
        let chunk = self.take_chunk();
        log::trace!(
            "terminal chunk: {} code lines, {} doc lines",
            chunk.code.len(),
            chunk.doc.len()
        );
        Some(Ok(chunk))
    }
}

impl<I, L, E> FusedIterator for Segmenter<I>
where
    I: Iterator<Item = Result<L, E>>,
    L: Into<String>,
{
}

/// Segment in-memory text with the default `#` marker
pub fn segment(text: &str) -> impl Iterator<Item = Chunk> + '_ {
    segment_str(text, &CommentMarker::default())
}

/// Segment in-memory text with the given marker
///
/// Lines are split after each `\n`, so terminators are preserved.
pub fn segment_str<'a>(text: &'a str, marker: &CommentMarker) -> impl Iterator<Item = Chunk> + 'a {
    let lines = text.split_inclusive('\n').map(Ok::<_, Infallible>);
    Segmenter::with_marker(lines, marker.clone()).map(|item| match item {
        Ok(chunk) => chunk,
        Err(never) => match never {},
    })
}

/// Segment a buffered reader, yielding its I/O errors unchanged
pub fn segment_reader<R: BufRead>(reader: R, marker: CommentMarker) -> Segmenter<LineSource<R>> {
    Segmenter::with_marker(LineSource::new(reader), marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(text: &str) -> Vec<Chunk> {
        segment(text).collect()
    }

    fn chunk(code: &[&str], doc: &[&str]) -> Chunk {
        Chunk::new(
            code.iter().map(|s| s.to_string()).collect(),
            doc.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_doc_then_code_is_one_chunk() {
        assert_eq!(
            chunks("# Title\n# more text\ncode1\ncode2\n"),
            vec![chunk(&["code1\n", "code2\n"], &["Title", "more text"])]
        );
    }

    #[test]
    fn test_leading_code_gets_its_own_chunk() {
        assert_eq!(
            chunks("code1\n# doc\ncode2\n"),
            vec![chunk(&["code1\n"], &[]), chunk(&["code2\n"], &["doc"])]
        );
    }

    #[test]
    fn test_bare_marker_inside_doc_is_blank_line() {
        assert_eq!(
            chunks("# first\n#\n# second\ncode\n"),
            vec![chunk(&["code\n"], &["first", "", "second"])]
        );
    }

    #[test]
    fn test_empty_input_yields_one_empty_chunk() {
        assert_eq!(chunks(""), vec![Chunk::default()]);
    }

    #[test]
    fn test_only_comment() {
        assert_eq!(
            chunks("# only comment\n"),
            vec![chunk(&[], &["only comment"])]
        );
    }

    #[test]
    fn test_no_comments_is_single_code_chunk() {
        assert_eq!(
            chunks("#!/bin/sh\nset -e\necho hi"),
            vec![chunk(&["#!/bin/sh\n", "set -e\n", "echo hi"], &[])]
        );
    }

    #[test]
    fn test_runs_separated_by_code() {
        let text = "# one\na\n# two\nb\n# three\nc\n";
        assert_eq!(
            chunks(text),
            vec![
                chunk(&["a\n"], &["one"]),
                chunk(&["b\n"], &["two"]),
                chunk(&["c\n"], &["three"]),
            ]
        );
    }

    #[test]
    fn test_trailing_doc_lands_in_terminal_chunk() {
        assert_eq!(
            chunks("# one\na\n# trailing\n"),
            vec![chunk(&["a\n"], &["one"]), chunk(&[], &["trailing"])]
        );
    }

    #[test]
    fn test_indented_comments_are_doc() {
        assert_eq!(
            chunks("if true; then\n    # inside\n    echo hi\nfi\n"),
            vec![
                chunk(&["if true; then\n"], &[]),
                chunk(&["    echo hi\n", "fi\n"], &["inside"]),
            ]
        );
    }

    #[test]
    fn test_only_one_space_is_stripped() {
        assert_eq!(
            chunks("#     indented example\n"),
            vec![chunk(&[], &["    indented example"])]
        );
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed_from_doc() {
        assert_eq!(chunks("# text   \r\n"), vec![chunk(&[], &["text"])]);
    }

    #[test]
    fn test_code_lines_are_verbatim() {
        let text = "  echo 'a & b' <in >out  \r\n";
        assert_eq!(chunks(text), vec![chunk(&[text], &[])]);
    }

    #[test]
    fn test_leading_bare_marker_is_code() {
        assert_eq!(
            chunks("#\n# doc\ncode\n"),
            vec![chunk(&["#\n"], &[]), chunk(&["code\n"], &["doc"])]
        );
    }

    #[test]
    fn test_bare_marker_after_code_still_joins_pending_doc() {
        assert_eq!(
            chunks("# doc\ncode\n#\nmore\n"),
            vec![chunk(&["code\n", "more\n"], &["doc", ""])]
        );
    }

    #[test]
    fn test_marker_without_space_is_code() {
        assert_eq!(
            chunks("#!/bin/bash\n#no space\n"),
            vec![chunk(&["#!/bin/bash\n", "#no space\n"], &[])]
        );
    }

    #[test]
    fn test_custom_marker() {
        let marker = CommentMarker::new("//").unwrap();
        let result: Vec<Chunk> =
            segment_str("// Adds two numbers.\n//\n// Really.\nfn add() {}\n# x\n", &marker)
                .collect();
        assert_eq!(
            result,
            vec![chunk(
                &["fn add() {}\n", "# x\n"],
                &["Adds two numbers.", "", "Really."]
            )]
        );
    }

    #[test]
    fn test_is_lazy() {
        // Infinite source: a chunk still comes out as soon as its boundary is seen.
        let lines = ["# doc\n", "code\n"]
            .into_iter()
            .cycle()
            .map(Ok::<_, Infallible>);
        let first: Vec<Chunk> = Segmenter::new(lines)
            .take(2)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(first, vec![chunk(&["code\n"], &["doc"]); 2]);
    }

    #[test]
    fn test_fused_after_terminal_chunk() {
        let mut segmenter = Segmenter::new(Vec::<Result<String, ()>>::new());
        assert_eq!(segmenter.next(), Some(Ok(Chunk::default())));
        assert_eq!(segmenter.next(), None);
        assert_eq!(segmenter.next(), None);
    }

    #[test]
    fn test_source_error_is_passed_through() {
        let lines = vec![
            Ok("# doc\n"),
            Ok("code\n"),
            Ok("# next\n"),
            Err("disk on fire"),
            Ok("never read\n"),
        ];
        let result: Vec<Result<Chunk, &str>> = Segmenter::new(lines).collect();
        assert_eq!(
            result,
            vec![Ok(chunk(&["code\n"], &["doc"])), Err("disk on fire")]
        );
    }
}
