//! Vertex mode, builder flags, and the immutable mesh.

use bitflags::bitflags;

use crate::color::PackedColor;
use crate::math::{Point2, Rect};

/// How vertices (or indices, when present) are assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexMode {
    /// Every three vertices form an independent triangle.
    #[default]
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Each vertex after the second forms a triangle with the first vertex
    /// and the previous one.
    TriangleFan,
}

impl VertexMode {
    /// Map a script-side mode integer to a mode.
    ///
    /// Returns `None` for integers outside the known range.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Triangles),
            1 => Some(Self::TriangleStrip),
            2 => Some(Self::TriangleFan),
            _ => None,
        }
    }

    /// The raw integer this mode maps from.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Triangles => 0,
            Self::TriangleStrip => 1,
            Self::TriangleFan => 2,
        }
    }

    /// Number of triangles formed by `n` vertices (or indices) in this mode.
    pub fn primitive_count(self, n: u32) -> u32 {
        match self {
            Self::Triangles => n / 3,
            Self::TriangleStrip | Self::TriangleFan => n.saturating_sub(2),
        }
    }
}

bitflags! {
    /// Which optional attribute arrays a builder allocates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BuilderFlags: u32 {
        /// The mesh carries one texture coordinate per vertex.
        const HAS_TEX_COORDS = 1 << 0;
        /// The mesh carries one packed color per vertex.
        const HAS_COLORS = 1 << 1;
    }
}

impl Default for BuilderFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// An immutable vertex mesh.
///
/// Owns dense per-vertex positions, optional texture coordinates and packed
/// colors, and optional 16-bit triangle indices. Created once via
/// [`MeshBuilder::detach`](super::MeshBuilder::detach) and never modified,
/// so it can be shared read-only across threads without locking.
pub struct VertexMesh {
    pub(super) mode: VertexMode,
    pub(super) positions: Vec<Point2>,
    pub(super) tex_coords: Option<Vec<Point2>>,
    pub(super) colors: Option<Vec<PackedColor>>,
    pub(super) indices: Option<Vec<u16>>,
    pub(super) bounds: Option<Rect>,
}

impl VertexMesh {
    /// Get the vertex mode.
    pub fn mode(&self) -> VertexMode {
        self.mode
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Get the number of indices (0 for a non-indexed mesh).
    pub fn index_count(&self) -> u32 {
        self.indices.as_ref().map(|i| i.len() as u32).unwrap_or(0)
    }

    /// Check if this mesh carries texture coordinates.
    pub fn has_tex_coords(&self) -> bool {
        self.tex_coords.is_some()
    }

    /// Check if this mesh carries per-vertex colors.
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// Check if this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Get the vertex positions.
    pub fn positions(&self) -> &[Point2] {
        &self.positions
    }

    /// Get the texture coordinates, if present.
    pub fn tex_coords(&self) -> Option<&[Point2]> {
        self.tex_coords.as_deref()
    }

    /// Get the packed per-vertex colors, if present.
    pub fn colors(&self) -> Option<&[PackedColor]> {
        self.colors.as_deref()
    }

    /// Get the triangle indices, if present.
    pub fn indices(&self) -> Option<&[u16]> {
        self.indices.as_deref()
    }

    /// Get the bounding rectangle of the positions.
    ///
    /// `None` for a mesh with no vertices.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Get the positions as upload-ready bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Get the texture coordinates as upload-ready bytes, if present.
    pub fn tex_coord_bytes(&self) -> Option<&[u8]> {
        self.tex_coords.as_deref().map(bytemuck::cast_slice)
    }

    /// Get the packed colors as upload-ready bytes, if present.
    pub fn color_bytes(&self) -> Option<&[u8]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }

    /// Get the indices as upload-ready bytes, if present.
    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(bytemuck::cast_slice)
    }

    /// Approximate storage size of the mesh data in bytes.
    pub fn byte_size(&self) -> usize {
        self.position_bytes().len()
            + self.tex_coord_bytes().map(<[u8]>::len).unwrap_or(0)
            + self.color_bytes().map(<[u8]>::len).unwrap_or(0)
            + self.index_bytes().map(<[u8]>::len).unwrap_or(0)
    }
}

impl std::fmt::Debug for VertexMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexMesh")
            .field("mode", &self.mode)
            .field("vertex_count", &self.vertex_count())
            .field("index_count", &self.index_count())
            .field("has_tex_coords", &self.has_tex_coords())
            .field("has_colors", &self.has_colors())
            .field("bounds", &self.bounds)
            .finish()
    }
}

static_assertions::assert_impl_all!(VertexMesh: Send, Sync);
