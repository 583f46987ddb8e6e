//! Script-host binding layer.
//!
//! This module is the crate's entry point for a host scripting runtime:
//!
//! - [`BuildRequest`] - Borrowed view of the five flat input buffers
//! - [`build`] - Decode the buffers and construct a mesh
//! - [`MeshHandle`] - Reference-counted handle returned to the host
//! - [`NATIVES`] - The explicit exported-function table
//! - [`BuildError`] - What the binding layer can reject
//!
//! The host owns the input buffers and must not mutate them during the
//! call; the call itself is synchronous and runs to completion on the
//! calling thread.

mod decode;
mod error;
mod handle;
mod natives;
#[cfg(feature = "validate")]
mod validate;

pub use error::BuildError;
pub use handle::MeshHandle;
pub use natives::{build, find_native, BuildRequest, NativeEntry, NativeFn, NATIVES};
