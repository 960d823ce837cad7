//! Mesh-region engine for low-poly vertex painting.
//!
//! This crate contains the algorithmic core of the paint tools: given a
//! seed element on a [`PaintMesh`], it determines which mesh elements
//! (corners, and by extension faces and vertices) form a *region* of
//! approximately-equal color, and applies or queries colors over such
//! regions.
//!
//! The crate is organized around these pieces:
//!
//! - [`CornerAdjacency`] - Read-only adjacency view over a mesh snapshot
//! - [`connected_corners`] - Flood-fill traversal producing a corner region
//! - [`matching_corners`] - Global (non-connected) color match
//! - [`face_average_color`] / [`weighted_hit_color`] - Color sampling
//! - [`apply_color`] / [`apply_color_to_faces`] - Region mutation
//!
//! # Model
//!
//! A *region* is a maximal connected set of corners reachable from a seed
//! under a chosen adjacency relation (face-edge or shared-vertex) and a
//! tolerance-based color match. The engine never retains mesh state across
//! invocations: build a [`CornerAdjacency`] from a snapshot, run one
//! traversal, and hand the result back to the caller.
//!
//! # Example
//!
//! ```
//! use paint_types::{Color, PaintMesh, Point3, SelectionMask};
//! use paint_region::{apply_color, connected_corners, CornerAdjacency, FillOptions};
//!
//! // Two red triangles sharing an edge.
//! let mut mesh = PaintMesh::new();
//! let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! let v2 = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
//! let v3 = mesh.add_vertex(Point3::new(1.5, 1.0, 0.0));
//! mesh.add_face(&[v0, v1, v2]);
//! mesh.add_face(&[v1, v3, v2]);
//! for c in 0..mesh.corner_count() as u32 {
//!     mesh.set_corner_color(c, Color::RED);
//! }
//!
//! let adjacency = CornerAdjacency::from_mesh(&mesh);
//! let region = connected_corners(
//!     &mesh,
//!     &adjacency,
//!     &[0],
//!     &FillOptions::default(),
//!     &SelectionMask::none(),
//! )
//! .unwrap();
//! assert_eq!(region.len(), 6);
//!
//! apply_color(&mut mesh, region.iter().copied(), Color::BLUE);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod adjacency;
mod apply;
mod error;
mod flood;
mod sample;

pub use adjacency::CornerAdjacency;
pub use apply::{apply_color, apply_color_to_faces};
pub use error::{RegionError, RegionResult};
pub use flood::{connected_corners, matching_corners, region_faces, region_vertices, FillOptions};
pub use sample::{face_average_color, weighted_hit_color};

// Re-export for convenience
pub use paint_types::{Color, PaintMesh, SelectionMask};
