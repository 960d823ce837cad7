//! Corner adjacency view over a mesh snapshot.
//!
//! Provides the adjacency relations the flood-fill traversal depends on:
//! corner-to-corner via a shared face edge, corner-to-corner via a shared
//! vertex, and face-to-face via a shared edge. All queries run in time
//! proportional to local degree, not mesh size.

use hashbrown::HashMap;
use paint_types::PaintMesh;

/// Read-only adjacency view built from a [`PaintMesh`] snapshot.
///
/// Construction is a single pass over the mesh's corners, building an
/// edge-to-corners map and a vertex-to-corners map. The view holds no
/// colors; color reads during a traversal go straight to the mesh so that
/// a mutation followed by a fresh view never observes stale data.
///
/// A corner's *edge* is the undirected edge from its vertex to the next
/// corner's vertex in face winding order. Two corners are edge-linked when
/// they sit on the same edge from different faces; they are vertex-linked
/// when they reference the same vertex, regardless of whether their faces
/// share an edge.
///
/// # Example
///
/// ```
/// use paint_types::{PaintMesh, Point3};
/// use paint_region::CornerAdjacency;
///
/// let mut mesh = PaintMesh::new();
/// let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
/// let v2 = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
/// let v3 = mesh.add_vertex(Point3::new(1.5, 1.0, 0.0));
/// mesh.add_face(&[v0, v1, v2]);
/// mesh.add_face(&[v1, v3, v2]);
///
/// let adjacency = CornerAdjacency::from_mesh(&mesh);
/// assert_eq!(adjacency.edge_adjacent_faces(0), &[1]);
/// // Corner 1 (vertex 1 on face 0) shares its vertex with corner 3.
/// assert!(adjacency.vertex_linked_corners(1).any(|c| c == 3));
/// ```
#[derive(Debug, Clone)]
pub struct CornerAdjacency {
    /// Corner id -> owning face.
    corner_face: Vec<u32>,

    /// Corner id -> referenced vertex.
    corner_vertex: Vec<u32>,

    /// Corner id -> the corner's outgoing undirected edge.
    corner_edge: Vec<(u32, u32)>,

    /// Vertex -> corners referencing it.
    vertex_corners: Vec<Vec<u32>>,

    /// Undirected edge -> corners whose outgoing edge it is.
    edge_corners: HashMap<(u32, u32), Vec<u32>>,

    /// Face -> faces sharing an edge with it.
    face_neighbors: Vec<Vec<u32>>,
}

/// Normalize an edge so the smaller vertex index comes first.
const fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

impl CornerAdjacency {
    /// Build the adjacency view from a mesh.
    ///
    /// Runs in O(corners) expected time.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32 by design; larger meshes are unsupported.
    pub fn from_mesh(mesh: &PaintMesh) -> Self {
        let corner_count = mesh.corner_count();
        let face_count = mesh.face_count();

        let mut corner_face = vec![0u32; corner_count];
        let mut corner_edge = vec![(0u32, 0u32); corner_count];
        let mut vertex_corners: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertex_count()];
        let mut edge_corners: HashMap<(u32, u32), Vec<u32>> = HashMap::new();

        let corner_vertex = mesh.corner_vertices().to_vec();

        for face in 0..face_count as u32 {
            let range = mesh.face_corner_range(face);
            let verts = mesh.face_corner_vertices(face);
            for (i, corner) in range.clone().enumerate() {
                let c = corner as u32;
                let v = verts[i];
                let v_next = verts[(i + 1) % verts.len()];

                corner_face[corner] = face;
                corner_edge[corner] = normalize_edge(v, v_next);

                if let Some(list) = vertex_corners.get_mut(v as usize) {
                    list.push(c);
                }
                edge_corners.entry(corner_edge[corner]).or_default().push(c);
            }
        }

        // Face-to-face adjacency falls out of the edge map.
        let mut face_neighbors: Vec<Vec<u32>> = vec![Vec::new(); face_count];
        for corners in edge_corners.values() {
            for &a in corners {
                for &b in corners {
                    let (fa, fb) = (corner_face[a as usize], corner_face[b as usize]);
                    if fa != fb {
                        face_neighbors[fa as usize].push(fb);
                    }
                }
            }
        }
        for neighbors in &mut face_neighbors {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        Self {
            corner_face,
            corner_vertex,
            corner_edge,
            vertex_corners,
            edge_corners,
            face_neighbors,
        }
    }

    /// Number of corners in the underlying snapshot.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corner_face.len()
    }

    /// The face that owns a corner.
    ///
    /// # Panics
    ///
    /// Panics if the corner id is out of bounds for the snapshot.
    #[inline]
    #[must_use]
    pub fn face_of(&self, corner: u32) -> u32 {
        self.corner_face[corner as usize]
    }

    /// The vertex a corner references.
    ///
    /// # Panics
    ///
    /// Panics if the corner id is out of bounds for the snapshot.
    #[inline]
    #[must_use]
    pub fn vertex_of(&self, corner: u32) -> u32 {
        self.corner_vertex[corner as usize]
    }

    /// All corners referencing a vertex.
    ///
    /// Returns an empty slice for an out-of-bounds vertex.
    #[must_use]
    pub fn corners_of_vertex(&self, vertex: u32) -> &[u32] {
        self.vertex_corners
            .get(vertex as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Corners on other faces that share this corner's outgoing edge.
    pub fn edge_linked_corners(&self, corner: u32) -> impl Iterator<Item = u32> + '_ {
        self.edge_corners
            .get(&self.corner_edge[corner as usize])
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .copied()
            .filter(move |&c| c != corner)
    }

    /// Corners (on any face) that reference this corner's vertex,
    /// excluding the corner itself.
    pub fn vertex_linked_corners(&self, corner: u32) -> impl Iterator<Item = u32> + '_ {
        self.corners_of_vertex(self.vertex_of(corner))
            .iter()
            .copied()
            .filter(move |&c| c != corner)
    }

    /// Faces sharing an edge with the given face.
    ///
    /// Returns an empty slice for an out-of-bounds face.
    #[must_use]
    pub fn edge_adjacent_faces(&self, face: u32) -> &[u32] {
        self.face_neighbors
            .get(face as usize)
            .map_or(&[], Vec::as_slice)
    }
}
