//! Host-facing paint operations.
//!
//! This crate is the surface a host application (viewport, input routing,
//! undo stack) talks to. It turns screen-space input into mesh-region
//! operations:
//!
//! - [`MeshBvh`] - Cached spatial index for ray casting into a [`PaintMesh`]
//! - [`ViewProjection`] - The host's camera, mapping screen points to rays
//! - [`sample_color_at`] - Pick the paint color under the cursor
//! - [`fill_at`] - Flood- or global-fill from the face under the cursor
//! - [`select_linked_by_color`] / [`select_similar_by_color`] - Selection ops
//! - [`StrokeRasterizer`] - Drag gesture -> continuous painted stroke
//!
//! All operations are single-threaded, synchronous, and run to completion
//! before returning; tool settings (color, tolerance, mode flags) are
//! explicit parameters on every call rather than ambient state. A ray that
//! misses the mesh is not an error: the operation is a no-op for that
//! sample.
//!
//! # Example
//!
//! ```
//! use paint_brush::{fill_at, FillSettings, MeshBvh, Ray, ScreenPoint, ViewProjection};
//! use paint_types::{Color, PaintMesh, Point3, SelectionMask, Vector3};
//!
//! /// Orthographic top-down camera: one screen pixel per mesh unit.
//! struct TopDown;
//!
//! impl ViewProjection for TopDown {
//!     fn screen_ray(&self, point: ScreenPoint) -> Ray {
//!         Ray::new(
//!             Point3::new(point.x, point.y, 10.0),
//!             Vector3::new(0.0, 0.0, -1.0),
//!         )
//!     }
//! }
//!
//! let mut mesh = PaintMesh::new();
//! let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! let v1 = mesh.add_vertex(Point3::new(4.0, 0.0, 0.0));
//! let v2 = mesh.add_vertex(Point3::new(4.0, 4.0, 0.0));
//! let v3 = mesh.add_vertex(Point3::new(0.0, 4.0, 0.0));
//! mesh.add_face(&[v0, v1, v2, v3]);
//!
//! let bvh = MeshBvh::build(&mesh);
//! let painted = fill_at(
//!     &mut mesh,
//!     &bvh,
//!     &TopDown,
//!     ScreenPoint::new(2.0, 2.0),
//!     &FillSettings::new(Color::RED),
//!     &SelectionMask::none(),
//! )
//! .unwrap();
//! assert!(painted);
//! assert_eq!(mesh.corner_color(0), Some(Color::RED));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod ops;
mod raycast;
mod stroke;
mod view;

pub use error::{BrushError, BrushResult};
pub use ops::{
    fill_at, sample_color_at, select_linked_by_color, select_similar_by_color, FillSettings,
};
pub use raycast::{MeshBvh, Ray, RayHit};
pub use stroke::StrokeRasterizer;
pub use view::{ScreenPoint, ViewProjection};

// Re-export for convenience
pub use paint_types::{Color, PaintMesh, SelectionMask};
