//! The (code, documentation) pair produced by the segmenter

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A block of documentation together with the code it describes
///
/// `doc` precedes `code` in the original source. Code lines keep their
/// original terminators; doc strings have the comment marker, the single
/// following space and any surrounding whitespace removed.
///
/// Serializes as a two-element array `[code, doc]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// Raw code lines, terminators included
    pub code: Vec<String>,
    /// Documentation strings, one per comment line
    pub doc: Vec<String>,
}

impl Chunk {
    /// Create a chunk from its two halves
    pub fn new(code: Vec<String>, doc: Vec<String>) -> Self {
        Self { code, doc }
    }

    /// Whether both halves are empty
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.doc.is_empty()
    }

    /// Code lines concatenated verbatim
    pub fn code_text(&self) -> String {
        self.code.concat()
    }

    /// Documentation strings joined with newlines
    pub fn doc_text(&self) -> String {
        self.doc.join("\n")
    }
}

impl From<(Vec<String>, Vec<String>)> for Chunk {
    fn from((code, doc): (Vec<String>, Vec<String>)) -> Self {
        Self { code, doc }
    }
}

impl Serialize for Chunk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.code, &self.doc).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Chunk {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(Vec<String>, Vec<String>)>::deserialize(deserializer).map(Chunk::from)
    }
}
