//! Error types for brush operations.

use thiserror::Error;

/// Result type for brush operations.
pub type BrushResult<T> = Result<T, BrushError>;

/// Errors that can occur during brush operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BrushError {
    /// A selection operation was invoked with nothing selected.
    #[error("operation requires at least one selected face")]
    EmptySelection,

    /// A region traversal failed.
    #[error(transparent)]
    Region(#[from] paint_region::RegionError),
}
