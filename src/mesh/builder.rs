//! Mutable staging storage for building one mesh.

use crate::color::PackedColor;
use crate::math::{Point2, Rect};

use super::data::{BuilderFlags, VertexMesh, VertexMode};

/// Staging storage for one [`VertexMesh`].
///
/// A builder is sized up front for `(mode, vertex_count, index_count, flags)`
/// and exposes its regions as mutable slices. Fill the regions, then call
/// [`detach`](Self::detach) to freeze them into a [`VertexMesh`].
///
/// Regions start zero-filled; a region left untouched stays zeroed.
///
/// # Example
///
/// ```
/// use meshbuild::math::Point2;
/// use meshbuild::{BuilderFlags, MeshBuilder, VertexMode};
///
/// let mut builder = MeshBuilder::new(VertexMode::Triangles, 3, 3, BuilderFlags::empty());
/// builder.positions_mut().copy_from_slice(&[
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ]);
/// builder.indices_mut().unwrap().copy_from_slice(&[0, 1, 2]);
/// let mesh = builder.detach();
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug)]
pub struct MeshBuilder {
    mode: VertexMode,
    positions: Vec<Point2>,
    tex_coords: Option<Vec<Point2>>,
    colors: Option<Vec<PackedColor>>,
    indices: Option<Vec<u16>>,
}

impl MeshBuilder {
    /// Allocate a builder for the given shape.
    ///
    /// Texture coordinate and color regions exist only when the matching
    /// flag is set; the index region exists only when `index_count` is
    /// nonzero. Optional regions are sized to `vertex_count`.
    pub fn new(mode: VertexMode, vertex_count: u32, index_count: u32, flags: BuilderFlags) -> Self {
        let vertex_count = vertex_count as usize;
        Self {
            mode,
            positions: vec![Point2::origin(); vertex_count],
            tex_coords: flags
                .contains(BuilderFlags::HAS_TEX_COORDS)
                .then(|| vec![Point2::origin(); vertex_count]),
            colors: flags
                .contains(BuilderFlags::HAS_COLORS)
                .then(|| vec![PackedColor::default(); vertex_count]),
            indices: (index_count > 0).then(|| vec![0u16; index_count as usize]),
        }
    }

    /// Get the vertex mode the builder was allocated for.
    pub fn mode(&self) -> VertexMode {
        self.mode
    }

    /// Mutable position region.
    pub fn positions_mut(&mut self) -> &mut [Point2] {
        &mut self.positions
    }

    /// Mutable texture coordinate region, if allocated.
    pub fn tex_coords_mut(&mut self) -> Option<&mut [Point2]> {
        self.tex_coords.as_deref_mut()
    }

    /// Mutable color region, if allocated.
    pub fn colors_mut(&mut self) -> Option<&mut [PackedColor]> {
        self.colors.as_deref_mut()
    }

    /// Mutable index region, if allocated.
    pub fn indices_mut(&mut self) -> Option<&mut [u16]> {
        self.indices.as_deref_mut()
    }

    /// Finalize the builder into an immutable [`VertexMesh`].
    ///
    /// Computes the position bounds and transfers the storage; the builder
    /// is consumed.
    pub fn detach(self) -> VertexMesh {
        let bounds = Rect::from_points(self.positions.iter().copied());
        VertexMesh {
            mode: self.mode,
            positions: self.positions,
            tex_coords: self.tex_coords,
            colors: self.colors,
            indices: self.indices,
            bounds,
        }
    }
}
