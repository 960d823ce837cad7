//! Error types for region operations.

use thiserror::Error;

/// Result type for region operations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur during region operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// Mesh has no faces.
    #[error("mesh is empty")]
    EmptyMesh,

    /// No seed faces were provided for a traversal.
    #[error("no seed faces provided")]
    NoSeeds,

    /// A seed face index is out of bounds.
    #[error("face index {face} out of bounds (mesh has {face_count} faces)")]
    FaceOutOfBounds {
        /// The invalid face index.
        face: u32,
        /// Total number of faces in the mesh.
        face_count: usize,
    },
}
