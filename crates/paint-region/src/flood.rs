//! Flood-fill traversal over corner adjacency.

use hashbrown::HashSet;
use paint_types::{Color, PaintMesh, SelectionMask};
use std::collections::VecDeque;

use crate::adjacency::CornerAdjacency;
use crate::error::{RegionError, RegionResult};
use crate::sample::face_average_color;

/// Configuration for a flood-fill traversal.
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Reference color to match against. When `None`, the traversal uses
    /// the average color of the first seed face.
    pub reference: Option<Color>,

    /// Color-match tolerance, in `[0, 1]`.
    pub tolerance: f32,

    /// When `true`, traversal crosses shared vertices; otherwise it only
    /// crosses shared face edges.
    pub traverse_vertices: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            reference: None,
            tolerance: 0.005,
            traverse_vertices: false,
        }
    }
}

impl FillOptions {
    /// Set an explicit reference color.
    #[must_use]
    pub fn with_reference(mut self, color: Color) -> Self {
        self.reference = Some(color);
        self
    }

    /// Set the color-match tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable traversal across shared vertices.
    #[must_use]
    pub fn traverse_vertices(mut self, traverse: bool) -> Self {
        self.traverse_vertices = traverse;
        self
    }

    /// Preset for select-linked: tight tolerance, vertex traversal, and a
    /// reference auto-derived from the seed.
    #[must_use]
    pub fn select_linked() -> Self {
        Self {
            reference: None,
            tolerance: 0.001,
            traverse_vertices: true,
        }
    }
}

/// Compute the connected region of corners matching a reference color.
///
/// Breadth-first traversal over faces starting from `seeds`. For each
/// visited face, every corner whose color matches the reference within
/// tolerance is considered: the corner is *recorded* into the result if
/// the face passes the face mask and its vertex passes the vertex mask,
/// and - recorded or not - the traversal expands through it to the corners
/// it is linked to (via shared vertex when `traverse_vertices`, otherwise
/// via shared face edge). A linked corner's owning face is enqueued when
/// it has not been visited and the linked corner itself matches the
/// reference.
///
/// Selection masks gate *recording*, never reachability: a region may pass
/// through unselected geometry and resume recording on its far side.
///
/// `mesh` must be the same snapshot `adjacency` was built from.
///
/// # Errors
///
/// - [`RegionError::EmptyMesh`] when the mesh has no faces
/// - [`RegionError::NoSeeds`] when `seeds` is empty
/// - [`RegionError::FaceOutOfBounds`] when a seed face does not exist
#[allow(clippy::cast_possible_truncation)]
// Mesh indices are u32 by design; larger meshes are unsupported.
pub fn connected_corners(
    mesh: &PaintMesh,
    adjacency: &CornerAdjacency,
    seeds: &[u32],
    options: &FillOptions,
    mask: &SelectionMask,
) -> RegionResult<HashSet<u32>> {
    if mesh.is_empty() {
        return Err(RegionError::EmptyMesh);
    }
    if seeds.is_empty() {
        return Err(RegionError::NoSeeds);
    }
    for &seed in seeds {
        if seed as usize >= mesh.face_count() {
            return Err(RegionError::FaceOutOfBounds {
                face: seed,
                face_count: mesh.face_count(),
            });
        }
    }

    let reference = options
        .reference
        .unwrap_or_else(|| face_average_color(mesh, seeds[0]));
    let colors = mesh.corner_colors();

    let mut visited: HashSet<u32> = seeds.iter().copied().collect();
    let mut queue: VecDeque<u32> = visited.iter().copied().collect();
    let mut region: HashSet<u32> = HashSet::new();

    while let Some(face) = queue.pop_back() {
        let record = mask.is_face_selected(face);

        for corner in mesh.face_corner_range(face) {
            let c = corner as u32;
            if !colors[corner].approx_eq(reference, options.tolerance) {
                continue;
            }

            if record && mask.is_vertex_selected(adjacency.vertex_of(c)) {
                region.insert(c);
            }

            // Whether recorded or not, try to travel onward through this
            // corner's links.
            let expand = |linked: u32, visited: &mut HashSet<u32>, queue: &mut VecDeque<u32>| {
                let linked_face = adjacency.face_of(linked);
                if !visited.contains(&linked_face)
                    && colors[linked as usize].approx_eq(reference, options.tolerance)
                {
                    visited.insert(linked_face);
                    queue.push_front(linked_face);
                }
            };

            if options.traverse_vertices {
                for linked in adjacency.vertex_linked_corners(c) {
                    expand(linked, &mut visited, &mut queue);
                }
            } else {
                for linked in adjacency.edge_linked_corners(c) {
                    expand(linked, &mut visited, &mut queue);
                }
            }
        }
    }

    Ok(region)
}

/// Every corner in the mesh whose color matches `reference` within
/// `tolerance`, with no connectivity requirement.
///
/// This is the non-continuous fill: one linear pass over the corner
/// colors.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn matching_corners(mesh: &PaintMesh, reference: Color, tolerance: f32) -> HashSet<u32> {
    mesh.corner_colors()
        .iter()
        .enumerate()
        .filter(|(_, color)| color.approx_eq(reference, tolerance))
        .map(|(corner, _)| corner as u32)
        .collect()
}

/// The faces touched by a corner region.
///
/// A face is in the region iff at least one of its corners is.
#[must_use]
pub fn region_faces(adjacency: &CornerAdjacency, corners: &HashSet<u32>) -> HashSet<u32> {
    corners.iter().map(|&c| adjacency.face_of(c)).collect()
}

/// The vertices touched by a corner region.
///
/// A vertex is in the region iff at least one corner referencing it is.
#[must_use]
pub fn region_vertices(mesh: &PaintMesh, corners: &HashSet<u32>) -> HashSet<u32> {
    corners
        .iter()
        .filter_map(|&c| mesh.corner_vertex(c))
        .collect()
}
