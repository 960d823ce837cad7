//! Core data model for low-poly vertex painting.
//!
//! This crate provides the foundational types for painting discrete-looking
//! vertex colors on a polygon mesh:
//!
//! - [`Color`] - An RGBA color with a tolerance-based equality test
//! - [`PaintMesh`] - A polygon mesh carrying one color per face corner
//! - [`SelectionMask`] - Optional host-supplied face/vertex selection state
//!
//! Vertex colors are stored **per corner** (one entry for each face's
//! reference to a vertex), not per vertex. This is what allows hard color
//! seams between adjacent faces, which is the defining look of low-poly
//! vertex painting.
//!
//! # Units and Color Space
//!
//! Color channels are nominally in `[0, 1]`. No color space conversion is
//! performed anywhere in this workspace; gamma-correct display is the
//! host's concern. Positions are `f64`, unit-agnostic.
//!
//! # Example
//!
//! ```
//! use paint_types::{Color, PaintMesh, Point3};
//!
//! let mut mesh = PaintMesh::new();
//! let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
//! let face = mesh.add_face(&[a, b, c]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.face_corner_colors(face), &[Color::WHITE; 3]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod color;
mod mesh;
mod selection;

pub use color::Color;
pub use mesh::PaintMesh;
pub use selection::SelectionMask;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
