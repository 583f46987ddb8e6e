//! The build operation and the exported native-call table.

use crate::mesh::{BuilderFlags, MeshBuilder, VertexMode};

use super::decode;
use super::error::BuildError;
use super::handle::MeshHandle;

/// Borrowed view of the five flat buffers a script host supplies.
///
/// Each buffer is either empty or fully populated; an empty texture
/// coordinate, color, or index buffer means the mesh carries no such data.
/// The buffers stay owned by the caller and are only read.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// Script-side vertex mode integer (see [`VertexMode::from_raw`]).
    pub mode: i32,
    /// Interleaved `(x, y)` vertex positions; two elements per vertex.
    pub positions: &'a [f32],
    /// Interleaved `(u, v)` texture coordinates, or empty.
    pub tex_coords: &'a [f32],
    /// Packed 32-bit colors, one per vertex, or empty.
    pub colors: &'a [i32],
    /// Triangle indices, or empty for non-indexed drawing.
    pub indices: &'a [i32],
}

/// Build an immutable mesh from a request.
///
/// The vertex count is `positions.len() / 2` and the index count is
/// `indices.len()`. Non-empty texture coordinate and color buffers turn on
/// the matching [`BuilderFlags`]; each populated buffer is decoded into the
/// builder region of the same name, and the builder is then detached into a
/// [`VertexMesh`](crate::mesh::VertexMesh) wrapped in a fresh [`MeshHandle`].
///
/// Without the `validate` feature the decode trusts the caller: odd
/// position lengths drop the trailing element and index values are narrowed
/// to 16 bits without bounds checks.
pub fn build(req: &BuildRequest<'_>) -> Result<MeshHandle, BuildError> {
    let mode = VertexMode::from_raw(req.mode).ok_or(BuildError::UnknownMode(req.mode))?;

    #[cfg(feature = "validate")]
    super::validate::check_request(req)?;

    let vertex_count = (req.positions.len() / 2) as u32;
    let index_count = req.indices.len() as u32;

    let mut flags = BuilderFlags::empty();
    if !req.tex_coords.is_empty() {
        flags |= BuilderFlags::HAS_TEX_COORDS;
    }
    if !req.colors.is_empty() {
        flags |= BuilderFlags::HAS_COLORS;
    }

    log::trace!(
        "building {mode:?} mesh: {vertex_count} vertices, {index_count} indices, flags {flags:?}"
    );

    let mut builder = MeshBuilder::new(mode, vertex_count, index_count, flags);
    decode::decode_points(req.positions, builder.positions_mut());
    if let Some(out) = builder.tex_coords_mut() {
        decode::decode_points(req.tex_coords, out);
    }
    if let Some(out) = builder.colors_mut() {
        decode::decode_colors(req.colors, out);
    }
    if let Some(out) = builder.indices_mut() {
        decode::decode_indices(req.indices, out);
    }

    Ok(MeshHandle::new(builder.detach()))
}

/// Signature shared by every exported native call.
pub type NativeFn = for<'a> fn(&BuildRequest<'a>) -> Result<MeshHandle, BuildError>;

/// One entry of the exported native-call table.
#[derive(Debug, Clone, Copy)]
pub struct NativeEntry {
    /// Name the script host binds the call under.
    pub name: &'static str,
    /// Number of script-side arguments.
    pub arity: usize,
    /// The native implementation.
    pub func: NativeFn,
}

/// Native calls exported by this crate, listed explicitly.
pub const NATIVES: &[NativeEntry] = &[NativeEntry {
    name: "mesh_build",
    arity: 5,
    func: build,
}];

/// Look up an exported native call by name.
pub fn find_native(name: &str) -> Option<&'static NativeEntry> {
    NATIVES.iter().find(|entry| entry.name == name)
}
