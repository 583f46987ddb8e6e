//! Binding-layer error types.

/// Errors the binding layer can report for a build request.
///
/// Only [`UnknownMode`](Self::UnknownMode) is reachable in a default build.
/// The remaining variants are produced by the strict checks behind the
/// `validate` feature; without it, malformed counts and out-of-range
/// indices pass through the decoder unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The mode integer does not name a known vertex mode.
    UnknownMode(i32),
    /// The position buffer length is odd and cannot form (x, y) pairs.
    OddPositionCount(usize),
    /// The texture coordinate buffer length does not match the position
    /// buffer length.
    TexCoordCountMismatch {
        /// Expected element count (the position buffer length).
        expected: usize,
        /// Actual texture coordinate element count.
        actual: usize,
    },
    /// The color buffer length does not match the vertex count.
    ColorCountMismatch {
        /// Expected color count (one per vertex).
        expected: usize,
        /// Actual color count.
        actual: usize,
    },
    /// An index is negative, exceeds 16 bits, or refers past the last vertex.
    IndexOutOfRange {
        /// Position of the offending element in the index buffer.
        element: usize,
        /// The offending value.
        value: i32,
        /// Number of vertices the index may refer to.
        vertex_count: usize,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMode(raw) => write!(f, "unknown vertex mode: {raw}"),
            Self::OddPositionCount(len) => {
                write!(f, "position buffer length {len} is not a multiple of 2")
            }
            Self::TexCoordCountMismatch { expected, actual } => write!(
                f,
                "texture coordinate buffer has {actual} elements, expected {expected}"
            ),
            Self::ColorCountMismatch { expected, actual } => {
                write!(f, "color buffer has {actual} elements, expected {expected}")
            }
            Self::IndexOutOfRange {
                element,
                value,
                vertex_count,
            } => write!(
                f,
                "index {value} at element {element} is out of range for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for BuildError {}
