//! Polygon mesh with per-corner colors.

use nalgebra::Point3;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// A polygon mesh whose paint attribute lives on face corners.
///
/// Each face is an ordered cyclic sequence of *corners*; a corner
/// references exactly one vertex and carries its own [`Color`]. A vertex
/// referenced by corners of several faces can therefore show a different
/// color on each face (a hard seam).
///
/// # Storage
///
/// Corners are stored flattened across all faces, with a face's corners
/// addressed through an offset table:
///
/// - `positions[v]` - position of vertex `v`
/// - `face_offsets[f]..face_offsets[f + 1]` - global corner ids of face `f`
/// - `corner_vertices[c]` - the vertex referenced by corner `c`
/// - `corner_colors[c]` - the color painted on corner `c`
///
/// Corner ids are stable for the life of the mesh; faces are append-only.
///
/// # Example
///
/// ```
/// use paint_types::{Color, PaintMesh, Point3};
///
/// let mut mesh = PaintMesh::new();
/// let v: Vec<u32> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
///     .iter()
///     .map(|&(x, y)| mesh.add_vertex(Point3::new(x, y, 0.0)))
///     .collect();
/// let quad = mesh.add_face(&v);
///
/// assert_eq!(mesh.corner_count(), 4);
/// mesh.set_corner_color(0, Color::RED);
/// assert_eq!(mesh.corner_color(0), Some(Color::RED));
/// assert_eq!(mesh.face_corner_vertices(quad), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaintMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    face_offsets: Vec<u32>,
    corner_vertices: Vec<u32>,
    corner_colors: Vec<Color>,
}

impl PaintMesh {
    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            face_offsets: vec![0],
            corner_vertices: Vec::new(),
            corner_colors: Vec::new(),
        }
    }

    /// Append a vertex and return its index.
    ///
    /// # Panics
    ///
    /// Panics if the mesh already holds `u32::MAX` vertices.
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32 by design; larger meshes are unsupported.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Append a face from vertex indices, in winding order, and return its
    /// index. The new corners are colored [`Color::default`].
    ///
    /// Vertex indices are not validated here; adjacency construction and
    /// the traversal operations treat out-of-range references as absent
    /// geometry.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_face(&mut self, vertices: &[u32]) -> u32 {
        let face = self.face_count() as u32;
        self.corner_vertices.extend_from_slice(vertices);
        self.corner_colors
            .extend(std::iter::repeat(Color::default()).take(vertices.len()));
        self.face_offsets.push(self.corner_vertices.len() as u32);
        face
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_offsets.len() - 1
    }

    /// Number of corners across all faces.
    #[inline]
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corner_vertices.len()
    }

    /// Check if the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.face_count() == 0
    }

    /// The global corner id range of a face.
    ///
    /// Returns an empty range for an out-of-bounds face index.
    #[must_use]
    pub fn face_corner_range(&self, face: u32) -> Range<usize> {
        let f = face as usize;
        if f + 1 >= self.face_offsets.len() {
            return 0..0;
        }
        self.face_offsets[f] as usize..self.face_offsets[f + 1] as usize
    }

    /// The vertex indices of a face's corners, in winding order.
    #[must_use]
    pub fn face_corner_vertices(&self, face: u32) -> &[u32] {
        &self.corner_vertices[self.face_corner_range(face)]
    }

    /// The colors of a face's corners, in winding order.
    #[must_use]
    pub fn face_corner_colors(&self, face: u32) -> &[Color] {
        &self.corner_colors[self.face_corner_range(face)]
    }

    /// All corner vertex references, indexed by global corner id.
    #[inline]
    #[must_use]
    pub fn corner_vertices(&self) -> &[u32] {
        &self.corner_vertices
    }

    /// All corner colors, indexed by global corner id.
    #[inline]
    #[must_use]
    pub fn corner_colors(&self) -> &[Color] {
        &self.corner_colors
    }

    /// The vertex referenced by a corner, if the corner id is in range.
    #[must_use]
    pub fn corner_vertex(&self, corner: u32) -> Option<u32> {
        self.corner_vertices.get(corner as usize).copied()
    }

    /// The color of a corner, if the corner id is in range.
    #[must_use]
    pub fn corner_color(&self, corner: u32) -> Option<Color> {
        self.corner_colors.get(corner as usize).copied()
    }

    /// Set the color of a corner. Out-of-range corner ids are ignored.
    pub fn set_corner_color(&mut self, corner: u32, color: Color) {
        if let Some(slot) = self.corner_colors.get_mut(corner as usize) {
            *slot = color;
        }
    }

    /// The position of a vertex, if the index is in range.
    #[must_use]
    pub fn vertex_position(&self, vertex: u32) -> Option<Point3<f64>> {
        self.positions.get(vertex as usize).copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quad_pair() -> PaintMesh {
        // Two unit quads sharing the edge (1, 2).
        let mut mesh = PaintMesh::new();
        for &(x, y) in &[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (2.0, 0.0),
            (2.0, 1.0),
        ] {
            mesh.add_vertex(Point3::new(x, y, 0.0));
        }
        mesh.add_face(&[0, 1, 2, 3]);
        mesh.add_face(&[1, 4, 5, 2]);
        mesh
    }

    #[test]
    fn empty_mesh() {
        let mesh = PaintMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.corner_count(), 0);
        assert_eq!(mesh.face_corner_range(0), 0..0);
    }

    #[test]
    fn corner_layout() {
        let mesh = quad_pair();
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.corner_count(), 8);
        assert_eq!(mesh.face_corner_range(0), 0..4);
        assert_eq!(mesh.face_corner_range(1), 4..8);
        assert_eq!(mesh.face_corner_vertices(1), &[1, 4, 5, 2]);
    }

    #[test]
    fn corners_default_white() {
        let mesh = quad_pair();
        assert!(mesh.corner_colors().iter().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn per_corner_color_seam() {
        // The same vertex may carry different colors on different faces.
        let mut mesh = quad_pair();
        mesh.set_corner_color(1, Color::RED); // vertex 1, face 0
        mesh.set_corner_color(4, Color::BLUE); // vertex 1, face 1

        assert_eq!(mesh.corner_vertex(1), Some(1));
        assert_eq!(mesh.corner_vertex(4), Some(1));
        assert_eq!(mesh.corner_color(1), Some(Color::RED));
        assert_eq!(mesh.corner_color(4), Some(Color::BLUE));
    }

    #[test]
    fn out_of_range_accessors() {
        let mut mesh = quad_pair();
        assert_eq!(mesh.corner_color(100), None);
        assert_eq!(mesh.corner_vertex(100), None);
        assert_eq!(mesh.vertex_position(100), None);
        mesh.set_corner_color(100, Color::RED); // ignored
        assert_eq!(mesh.corner_count(), 8);
    }
}
