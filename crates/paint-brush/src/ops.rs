//! Cursor-driven paint and selection operations.
//!
//! Each operation here is one user action: a click, a fill, a menu item.
//! Screen input goes through the host's [`ViewProjection`] to a ray, the
//! ray through a [`MeshBvh`] to a face, and the face into the region
//! machinery of `paint-region`.

use hashbrown::HashSet;
use tracing::{debug, info};

use paint_region::{
    apply_color, apply_color_to_faces, connected_corners, face_average_color, matching_corners,
    region_faces, weighted_hit_color, CornerAdjacency, FillOptions,
};
use paint_types::{Color, PaintMesh, SelectionMask};

use crate::error::{BrushError, BrushResult};
use crate::raycast::MeshBvh;
use crate::view::{ScreenPoint, ViewProjection};

/// Settings for a fill action.
///
/// Every knob is explicit; there is no ambient tool state. The defaults
/// match the interactive fill tool: a loose tolerance and contiguous
/// spread across edges only.
#[derive(Debug, Clone, Copy)]
pub struct FillSettings {
    /// Color to apply. Its alpha is forced to `1.0` when painting.
    pub color: Color,
    /// Color match tolerance for the region walk.
    pub tolerance: f32,
    /// When `true`, fill only the connected region under the cursor; when
    /// `false`, recolor every matching corner in the mesh.
    pub continuous: bool,
    /// Spread through shared vertices as well as shared edges.
    pub traverse_vertices: bool,
}

impl FillSettings {
    /// Fill settings with the given color and interactive-tool defaults.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            tolerance: 0.005,
            continuous: true,
            traverse_vertices: false,
        }
    }

    /// Set the match tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Toggle contiguous mode.
    #[must_use]
    pub const fn continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Toggle vertex traversal.
    #[must_use]
    pub const fn traverse_vertices(mut self, traverse: bool) -> Self {
        self.traverse_vertices = traverse;
        self
    }
}

/// Sample the paint color under a screen point.
///
/// The sampled color is the distance-weighted blend of the struck face's
/// corner colors. Returns `None` when the ray misses the mesh.
#[must_use]
pub fn sample_color_at(
    mesh: &PaintMesh,
    bvh: &MeshBvh,
    view: &impl ViewProjection,
    point: ScreenPoint,
) -> Option<Color> {
    let ray = view.screen_ray(point);
    let hit = bvh.cast(&ray)?;
    let color = weighted_hit_color(mesh, hit.face, &hit.point);
    debug!(face = hit.face, ?color, "sampled color under cursor");
    Some(color)
}

/// Fill the mesh region under a screen point with `settings.color`.
///
/// The reference color is sampled at the hit point, so clicking near a
/// corner of a multi-colored face matches that corner's color rather than
/// the face average. In contiguous mode the fill spreads from the struck
/// face through same-colored corners, recording only corners on faces and
/// vertices the mask selects; otherwise every matching corner in the mesh
/// is recolored and the mask is ignored.
///
/// Returns `Ok(false)` when the ray misses the mesh; nothing is painted.
///
/// # Errors
///
/// Propagates [`paint_region::RegionError`] from the region walk.
pub fn fill_at(
    mesh: &mut PaintMesh,
    bvh: &MeshBvh,
    view: &impl ViewProjection,
    point: ScreenPoint,
    settings: &FillSettings,
    mask: &SelectionMask,
) -> BrushResult<bool> {
    let ray = view.screen_ray(point);
    let Some(hit) = bvh.cast(&ray) else {
        debug!(x = point.x, y = point.y, "fill ray missed the mesh");
        return Ok(false);
    };

    let reference = weighted_hit_color(mesh, hit.face, &hit.point);
    let applied = settings.color.with_alpha(1.0);

    let region = if settings.continuous {
        let adjacency = CornerAdjacency::from_mesh(mesh);
        let options = FillOptions::default()
            .with_reference(reference)
            .with_tolerance(settings.tolerance)
            .traverse_vertices(settings.traverse_vertices);
        connected_corners(mesh, &adjacency, &[hit.face], &options, mask)?
    } else {
        matching_corners(mesh, reference, settings.tolerance)
    };

    info!(
        face = hit.face,
        corners = region.len(),
        continuous = settings.continuous,
        "filling region"
    );
    apply_color(mesh, region, applied);
    Ok(true)
}

/// Grow a face selection to the same-colored connected region around it.
///
/// All selected faces seed a single flood walk through shared vertices
/// (the linked-selection walk is deliberately more permissive than the
/// fill walk). The reference is the average color of the lowest-numbered
/// selected face; seeds of a different color stay selected but their
/// regions do not grow. The result is the union of the seeds and every
/// face the walk reaches.
///
/// `tolerance` defaults to a tight `0.001` when `None`.
///
/// # Errors
///
/// Returns [`BrushError::EmptySelection`] when `selected` is empty.
pub fn select_linked_by_color(
    mesh: &PaintMesh,
    adjacency: &CornerAdjacency,
    selected: &HashSet<u32>,
    tolerance: Option<f32>,
) -> BrushResult<HashSet<u32>> {
    if selected.is_empty() {
        return Err(BrushError::EmptySelection);
    }

    let mut seeds: Vec<u32> = selected.iter().copied().collect();
    seeds.sort_unstable();
    let reference = face_average_color(mesh, seeds[0]);

    let mut options = FillOptions::select_linked().with_reference(reference);
    if let Some(tolerance) = tolerance {
        options = options.with_tolerance(tolerance);
    }

    let corners = connected_corners(mesh, adjacency, &seeds, &options, &SelectionMask::none())?;
    let mut result = selected.clone();
    result.extend(region_faces(adjacency, &corners));

    info!(
        seeds = selected.len(),
        faces = result.len(),
        "grew selection to linked regions"
    );
    Ok(result)
}

/// Grow a face selection to every face of similar average color, anywhere
/// in the mesh.
///
/// The reference is the average color of the lowest-numbered selected
/// face, which makes the result deterministic when the selection spans
/// several colors. Connectivity is ignored.
///
/// # Errors
///
/// Returns [`BrushError::EmptySelection`] when `selected` is empty.
#[allow(clippy::cast_possible_truncation)]
// Mesh indices are u32 by design; larger meshes are unsupported.
pub fn select_similar_by_color(
    mesh: &PaintMesh,
    selected: &HashSet<u32>,
    tolerance: f32,
) -> BrushResult<HashSet<u32>> {
    let Some(&reference_face) = selected.iter().min() else {
        return Err(BrushError::EmptySelection);
    };
    let reference = face_average_color(mesh, reference_face);

    let mut result = selected.clone();
    for face in 0..mesh.face_count() as u32 {
        if face_average_color(mesh, face).approx_eq(reference, tolerance) {
            result.insert(face);
        }
    }

    info!(
        seeds = selected.len(),
        faces = result.len(),
        "grew selection to similar colors"
    );
    Ok(result)
}

/// Paint every corner of a face solid, if the mask selects the face.
///
/// This is the per-sample primitive of the stroke rasterizer; the fill
/// tools go through the region machinery instead.
pub(crate) fn paint_face(mesh: &mut PaintMesh, face: u32, color: Color, mask: &SelectionMask) {
    if mask.is_face_selected(face) {
        apply_color_to_faces(mesh, [face], color.with_alpha(1.0));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::raycast::Ray;
    use paint_types::{Point3, Vector3};

    /// Orthographic top-down camera: one pixel per mesh unit.
    struct TopDown;

    impl ViewProjection for TopDown {
        fn screen_ray(&self, point: ScreenPoint) -> Ray {
            Ray::new(
                Point3::new(point.x, point.y, 10.0),
                Vector3::new(0.0, 0.0, -1.0),
            )
        }
    }

    /// A 3x1 strip of unit quads in the z = 0 plane, faces 0..3 left to
    /// right, painted red, red, blue.
    fn painted_strip() -> PaintMesh {
        let mut mesh = PaintMesh::new();
        for x in 0..=3 {
            mesh.add_vertex(Point3::new(f64::from(x), 0.0, 0.0));
        }
        for x in 0..=3 {
            mesh.add_vertex(Point3::new(f64::from(x), 1.0, 0.0));
        }
        for i in 0..3u32 {
            mesh.add_face(&[i, i + 1, i + 5, i + 4]);
        }
        for corner in 0..8 {
            mesh.set_corner_color(corner, Color::RED);
        }
        for corner in 8..12 {
            mesh.set_corner_color(corner, Color::BLUE);
        }
        mesh
    }

    #[test]
    fn sample_returns_face_color() {
        let mesh = painted_strip();
        let bvh = MeshBvh::build(&mesh);

        let color = sample_color_at(&mesh, &bvh, &TopDown, ScreenPoint::new(0.5, 0.5)).unwrap();
        assert!(color.approx_eq(Color::RED, 1e-6));

        let color = sample_color_at(&mesh, &bvh, &TopDown, ScreenPoint::new(2.5, 0.5)).unwrap();
        assert!(color.approx_eq(Color::BLUE, 1e-6));
    }

    #[test]
    fn sample_misses_off_mesh() {
        let mesh = painted_strip();
        let bvh = MeshBvh::build(&mesh);
        assert!(sample_color_at(&mesh, &bvh, &TopDown, ScreenPoint::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn contiguous_fill_stops_at_color_boundary() {
        let mut mesh = painted_strip();
        let bvh = MeshBvh::build(&mesh);

        let painted = fill_at(
            &mut mesh,
            &bvh,
            &TopDown,
            ScreenPoint::new(0.5, 0.5),
            &FillSettings::new(Color::GREEN),
            &SelectionMask::none(),
        )
        .unwrap();
        assert!(painted);

        // The two red quads turn green; the blue quad is untouched.
        for corner in 0..8 {
            assert_eq!(mesh.corner_color(corner), Some(Color::GREEN));
        }
        for corner in 8..12 {
            assert_eq!(mesh.corner_color(corner), Some(Color::BLUE));
        }
    }

    #[test]
    fn global_fill_recolors_disconnected_matches() {
        let mut mesh = painted_strip();
        // Make the middle quad blue so the two red quads are disconnected.
        for corner in 4..8 {
            mesh.set_corner_color(corner, Color::BLUE);
        }
        let bvh = MeshBvh::build(&mesh);

        let settings = FillSettings::new(Color::GREEN).continuous(false);
        fill_at(
            &mut mesh,
            &bvh,
            &TopDown,
            ScreenPoint::new(0.5, 0.5),
            &settings,
            &SelectionMask::none(),
        )
        .unwrap();

        // Both red quads went green, including the disconnected one.
        for corner in 0..4 {
            assert_eq!(mesh.corner_color(corner), Some(Color::GREEN));
        }
        for corner in 8..12 {
            assert_eq!(mesh.corner_color(corner), Some(Color::GREEN));
        }
        for corner in 4..8 {
            assert_eq!(mesh.corner_color(corner), Some(Color::BLUE));
        }
    }

    #[test]
    fn fill_miss_is_ok_false() {
        let mut mesh = painted_strip();
        let bvh = MeshBvh::build(&mesh);
        let painted = fill_at(
            &mut mesh,
            &bvh,
            &TopDown,
            ScreenPoint::new(50.0, 50.0),
            &FillSettings::new(Color::GREEN),
            &SelectionMask::none(),
        )
        .unwrap();
        assert!(!painted);
        assert_eq!(mesh.corner_color(0), Some(Color::RED));
    }

    #[test]
    fn fill_forces_opaque_alpha() {
        let mut mesh = painted_strip();
        let bvh = MeshBvh::build(&mesh);
        let translucent = Color::new(0.0, 1.0, 0.0, 0.25);
        fill_at(
            &mut mesh,
            &bvh,
            &TopDown,
            ScreenPoint::new(0.5, 0.5),
            &FillSettings::new(translucent),
            &SelectionMask::none(),
        )
        .unwrap();
        let color = mesh.corner_color(0).unwrap();
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn select_linked_grows_to_region() {
        let mesh = painted_strip();
        let adjacency = CornerAdjacency::from_mesh(&mesh);
        let selected: HashSet<u32> = [0].into_iter().collect();

        let grown = select_linked_by_color(&mesh, &adjacency, &selected, None).unwrap();
        assert_eq!(grown, [0, 1].into_iter().collect());
    }

    #[test]
    fn select_linked_uses_one_reference_for_all_seeds() {
        // 4x1 strip: faces 0 and 1 red, faces 2 and 3 blue.
        let mut mesh = PaintMesh::new();
        for x in 0..=4 {
            mesh.add_vertex(Point3::new(f64::from(x), 0.0, 0.0));
        }
        for x in 0..=4 {
            mesh.add_vertex(Point3::new(f64::from(x), 1.0, 0.0));
        }
        for i in 0..4u32 {
            mesh.add_face(&[i, i + 1, i + 6, i + 5]);
        }
        for corner in 0..8 {
            mesh.set_corner_color(corner, Color::RED);
        }
        for corner in 8..16 {
            mesh.set_corner_color(corner, Color::BLUE);
        }

        let adjacency = CornerAdjacency::from_mesh(&mesh);
        let selected: HashSet<u32> = [0, 2].into_iter().collect();
        let grown = select_linked_by_color(&mesh, &adjacency, &selected, None).unwrap();

        // One walk, referenced on face 0's red: the red region grows to
        // face 1. The blue seed stays selected but face 3 is not pulled in.
        assert_eq!(grown, [0, 1, 2].into_iter().collect());
    }

    #[test]
    fn select_linked_rejects_empty_selection() {
        let mesh = painted_strip();
        let adjacency = CornerAdjacency::from_mesh(&mesh);
        let err = select_linked_by_color(&mesh, &adjacency, &HashSet::new(), None).unwrap_err();
        assert!(matches!(err, BrushError::EmptySelection));
    }

    #[test]
    fn select_similar_ignores_connectivity() {
        let mut mesh = painted_strip();
        // Red, blue, red: the two red quads do not touch.
        for corner in 4..8 {
            mesh.set_corner_color(corner, Color::BLUE);
        }
        for corner in 8..12 {
            mesh.set_corner_color(corner, Color::RED);
        }

        let selected: HashSet<u32> = [0].into_iter().collect();
        let grown = select_similar_by_color(&mesh, &selected, 0.001).unwrap();
        assert_eq!(grown, [0, 2].into_iter().collect());
    }

    #[test]
    fn select_similar_reference_is_lowest_face() {
        let mesh = painted_strip();
        // Selecting a red and a blue face: face 0 wins the reference.
        let selected: HashSet<u32> = [0, 2].into_iter().collect();
        let grown = select_similar_by_color(&mesh, &selected, 0.001).unwrap();
        // Matches are the red faces plus the original selection.
        assert_eq!(grown, [0, 1, 2].into_iter().collect());
    }
}
