//! Reference-counted mesh handle shared with the script host.

use std::sync::Arc;

use crate::mesh::VertexMesh;

/// A shared, reference-counted handle to one [`VertexMesh`].
///
/// The handle exclusively owns its mesh: the mesh is created once, never
/// replaced, and released when the last clone of the handle is dropped.
/// Because the mesh is immutable, clones can be handed to other threads
/// and read without locking.
#[derive(Debug, Clone)]
pub struct MeshHandle {
    mesh: Arc<VertexMesh>,
}

impl MeshHandle {
    /// Wrap a freshly built mesh.
    pub fn new(mesh: VertexMesh) -> Self {
        Self {
            mesh: Arc::new(mesh),
        }
    }

    /// Get the wrapped mesh.
    pub fn mesh(&self) -> &VertexMesh {
        &self.mesh
    }

    /// Number of live handles to this mesh.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.mesh)
    }

    /// Check whether two handles share the same mesh.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.mesh, &other.mesh)
    }
}

impl std::ops::Deref for MeshHandle {
    type Target = VertexMesh;

    fn deref(&self) -> &Self::Target {
        &self.mesh
    }
}

static_assertions::assert_impl_all!(MeshHandle: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{BuilderFlags, MeshBuilder, VertexMode};

    fn sample_handle() -> MeshHandle {
        let builder = MeshBuilder::new(VertexMode::Triangles, 3, 0, BuilderFlags::empty());
        MeshHandle::new(builder.detach())
    }

    #[test]
    fn test_clone_shares_mesh() {
        let handle = sample_handle();
        assert_eq!(handle.ref_count(), 1);

        let clone = handle.clone();
        assert_eq!(handle.ref_count(), 2);
        assert!(handle.ptr_eq(&clone));

        drop(clone);
        assert_eq!(handle.ref_count(), 1);
    }

    #[test]
    fn test_deref_reaches_mesh() {
        let handle = sample_handle();
        assert_eq!(handle.vertex_count(), 3);
        assert_eq!(handle.mesh().mode(), VertexMode::Triangles);
    }

    #[test]
    fn test_handle_crosses_threads() {
        let handle = sample_handle();
        let clone = handle.clone();
        let count = std::thread::spawn(move || clone.vertex_count())
            .join()
            .unwrap();
        assert_eq!(count, 3);
    }
}
