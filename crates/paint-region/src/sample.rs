//! Color sampling over faces and hit points.

use nalgebra::Point3;
use paint_types::{Color, PaintMesh};

/// Un-weighted average color of a face's corners.
///
/// Each channel is averaged independently. A face with no corners (or an
/// out-of-bounds face index) yields [`Color::ZERO`].
///
/// # Example
///
/// ```
/// use paint_types::{Color, PaintMesh, Point3};
/// use paint_region::face_average_color;
///
/// let mut mesh = PaintMesh::new();
/// let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
/// let v2 = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
/// let face = mesh.add_face(&[v0, v1, v2]);
/// mesh.set_corner_color(0, Color::RED);
/// mesh.set_corner_color(1, Color::RED);
/// mesh.set_corner_color(2, Color::RED);
///
/// assert_eq!(face_average_color(&mesh, face), Color::RED);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
// Corner counts are far below f32's integer range.
pub fn face_average_color(mesh: &PaintMesh, face: u32) -> Color {
    let colors = mesh.face_corner_colors(face);
    if colors.is_empty() {
        return Color::ZERO;
    }

    let mut sum = Color::ZERO;
    for &color in colors {
        sum += color;
    }
    sum * (1.0 / colors.len() as f32)
}

/// Distance-weighted color of a face at a point inside it.
///
/// Each corner's color is weighted by the Euclidean distance from `hit` to
/// the corner's vertex and the total is normalized by the distance sum.
/// Corners whose vertex index is out of range contribute nothing.
///
/// Note that the weight grows with distance, so the sample is pulled
/// *toward far corners* rather than near ones. Downstream tolerances are
/// calibrated against this weighting; do not change it to inverse-distance
/// without recalibrating them.
///
/// If the distance sum is zero (all corner vertices coincide with the hit
/// point) the result is [`Color::ZERO`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Weights are distances in mesh units; f32 precision is plenty for color mixing.
pub fn weighted_hit_color(mesh: &PaintMesh, face: u32, hit: &Point3<f64>) -> Color {
    let range = mesh.face_corner_range(face);
    let corner_vertices = &mesh.corner_vertices()[range.clone()];
    let corner_colors = &mesh.corner_colors()[range];

    let mut color = Color::ZERO;
    let mut total = 0.0_f64;

    for (&vertex, &corner_color) in corner_vertices.iter().zip(corner_colors) {
        let Some(position) = mesh.vertex_position(vertex) else {
            continue;
        };
        let distance = (hit - position).norm();
        total += distance;
        color += corner_color * distance as f32;
    }

    if total > 0.0 {
        color * (1.0 / total as f32)
    } else {
        Color::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn triangle(colors: [Color; 3]) -> PaintMesh {
        let mut mesh = PaintMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_face(&[0, 1, 2]);
        for (corner, color) in colors.into_iter().enumerate() {
            mesh.set_corner_color(corner as u32, color);
        }
        mesh
    }

    #[test]
    fn average_of_identical_corners_is_exact() {
        let mesh = triangle([Color::GREEN; 3]);
        assert_eq!(face_average_color(&mesh, 0), Color::GREEN);
    }

    #[test]
    fn average_mixes_channels_independently() {
        let mesh = triangle([Color::RED, Color::GREEN, Color::BLUE]);
        let avg = face_average_color(&mesh, 0);
        assert!((avg.r - 1.0 / 3.0).abs() < 1e-6);
        assert!((avg.g - 1.0 / 3.0).abs() < 1e-6);
        assert!((avg.b - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(avg.a, 1.0);
    }

    #[test]
    fn average_of_missing_face_is_zero() {
        let mesh = triangle([Color::RED; 3]);
        assert_eq!(face_average_color(&mesh, 9), Color::ZERO);
    }

    #[test]
    fn weighted_sample_at_centroid_is_strictly_mixed() {
        let mesh = triangle([Color::RED, Color::GREEN, Color::BLUE]);
        let centroid = Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0);
        let sample = weighted_hit_color(&mesh, 0, &centroid);

        for channel in [sample.r, sample.g, sample.b] {
            assert!(channel > 0.0 && channel < 1.0);
        }
        assert!((sample.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn weighted_sample_favors_far_corners() {
        // Hit next to the red corner: distance weighting pulls the sample
        // away from red, toward the far corners.
        let mesh = triangle([Color::RED, Color::GREEN, Color::BLUE]);
        let near_red = Point3::new(0.01, 0.01, 0.0);
        let sample = weighted_hit_color(&mesh, 0, &near_red);
        assert!(sample.r < sample.g);
        assert!(sample.r < sample.b);
    }

    #[test]
    fn weighted_sample_degenerate_is_zero() {
        // All vertices at the hit point: zero distance sum.
        let mut mesh = PaintMesh::new();
        for _ in 0..3 {
            mesh.add_vertex(Point3::new(2.0, 2.0, 2.0));
        }
        mesh.add_face(&[0, 1, 2]);
        let sample = weighted_hit_color(&mesh, 0, &Point3::new(2.0, 2.0, 2.0));
        assert_eq!(sample, Color::ZERO);
    }
}
