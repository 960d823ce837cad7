//! Region mutation: writing a color over corner and face sets.

use paint_types::{Color, PaintMesh};

/// Set every listed corner's color.
///
/// Out-of-range corner ids are ignored; mutation of an in-memory mesh has
/// no partial-failure mode.
///
/// # Example
///
/// ```
/// use paint_types::{Color, PaintMesh, Point3};
/// use paint_region::apply_color;
///
/// let mut mesh = PaintMesh::new();
/// let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
/// let v2 = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
/// mesh.add_face(&[v0, v1, v2]);
///
/// apply_color(&mut mesh, [0, 2], Color::BLUE);
/// assert_eq!(mesh.corner_color(0), Some(Color::BLUE));
/// assert_eq!(mesh.corner_color(1), Some(Color::WHITE));
/// ```
pub fn apply_color(mesh: &mut PaintMesh, corners: impl IntoIterator<Item = u32>, color: Color) {
    for corner in corners {
        mesh.set_corner_color(corner, color);
    }
}

/// Set every corner of every listed face to `color`.
#[allow(clippy::cast_possible_truncation)]
// Mesh indices are u32 by design; larger meshes are unsupported.
pub fn apply_color_to_faces(
    mesh: &mut PaintMesh,
    faces: impl IntoIterator<Item = u32>,
    color: Color,
) {
    for face in faces {
        for corner in mesh.face_corner_range(face) {
            mesh.set_corner_color(corner as u32, color);
        }
    }
}
