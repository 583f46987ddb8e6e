//! # Meshbuild
//!
//! Construction of immutable vertex meshes from flat numeric buffers, for
//! exposure to a host scripting runtime.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`binding`] - The script-host entry point: build request, native-call
//!   table, and the reference-counted [`MeshHandle`]
//! - [`mesh`] - [`MeshBuilder`] staging storage and the immutable
//!   [`VertexMesh`] it detaches into
//! - [`color`] - Packed 32-bit ARGB colors
//! - [`math`] - Point/vector aliases and the position bounding [`Rect`](math::Rect)
//!
//! ## Example
//!
//! ```
//! use meshbuild::{build, BuildRequest};
//!
//! let request = BuildRequest {
//!     mode: 0, // triangles
//!     positions: &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
//!     tex_coords: &[],
//!     colors: &[],
//!     indices: &[0, 1, 2],
//! };
//! let handle = build(&request).unwrap();
//! assert_eq!(handle.vertex_count(), 3);
//! ```

pub mod binding;
pub mod color;
pub mod math;
pub mod mesh;

// Re-export main types for convenience
pub use binding::{build, BuildError, BuildRequest, MeshHandle, NativeEntry, NATIVES};
pub use color::PackedColor;
pub use mesh::{BuilderFlags, MeshBuilder, VertexMesh, VertexMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library.
///
/// Optional; only logs the version so hosts can record what they loaded.
pub fn init() {
    log::info!("meshbuild v{} initialized", VERSION);
}
