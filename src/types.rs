//! Various types related to graph conversion.

/// The vertex id type, as written in an edge line.
///
/// Signed so that a negative index reads as an out-of-range vertex
/// rather than as a malformed number.
pub type VId = i64;

/// The edge weight type.
pub type Weight = f64;

/// One parsed edge line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    src: VId,
    dst: VId,
    weight: Weight,
}

impl EdgeRecord {
    pub fn new(src: VId, dst: VId, weight: Weight) -> Self {
        Self { src, dst, weight }
    }

    pub fn src(&self) -> VId {
        self.src
    }

    pub fn dst(&self) -> VId {
        self.dst
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Which part of the source file is being read.
///
/// A source starts with `Vertices` and switches to `Edges` at the first
/// blank line, never going back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePart {
    Vertices,
    Edges,
}

impl Default for FilePart {
    fn default() -> Self {
        FilePart::Vertices
    }
}
