//! Ray casting against a mesh via a bounding-volume hierarchy.
//!
//! The stroke rasterizer casts one ray every couple of screen pixels, so
//! intersection queries must not scan the whole mesh. [`MeshBvh`] is the
//! cached spatial index built once per gesture: polygonal faces are
//! fan-triangulated, triangles are packed into a median-split BVH, and
//! queries run an AABB slab test plus Möller–Trumbore per candidate.

use nalgebra::{Point3, Vector3};
use paint_types::PaintMesh;

const EPSILON: f64 = 1e-10;

/// A ray in mesh-local space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin.
    pub origin: Point3<f64>,
    /// Ray direction; does not need to be normalized.
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Create a ray.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// The result of a successful ray cast.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Intersection point, in mesh-local space.
    pub point: Point3<f64>,
    /// Unit normal of the struck triangle.
    pub normal: Vector3<f64>,
    /// Index of the struck mesh face (the polygon, not the fan triangle).
    pub face: u32,
    /// Ray parameter at the intersection.
    pub distance: f64,
}

/// One fan triangle with its owning face.
#[derive(Debug, Clone)]
struct FanTriangle {
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
    face: u32,
}

impl FanTriangle {
    fn aabb(&self) -> Aabb {
        Aabb {
            min: Point3::new(
                self.v0.x.min(self.v1.x).min(self.v2.x),
                self.v0.y.min(self.v1.y).min(self.v2.y),
                self.v0.z.min(self.v1.z).min(self.v2.z),
            ),
            max: Point3::new(
                self.v0.x.max(self.v1.x).max(self.v2.x),
                self.v0.y.max(self.v1.y).max(self.v2.y),
                self.v0.z.max(self.v1.z).max(self.v2.z),
            ),
        }
    }

    fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }

    fn normal(&self) -> Option<Vector3<f64>> {
        let normal = (self.v1 - self.v0).cross(&(self.v2 - self.v0));
        let len = normal.norm();
        if len > EPSILON {
            Some(normal / len)
        } else {
            None
        }
    }
}

/// Axis-aligned bounding box for BVH nodes.
#[derive(Debug, Clone)]
struct Aabb {
    min: Point3<f64>,
    max: Point3<f64>,
}

impl Aabb {
    fn expand(&mut self, other: &Self) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.min.z = self.min.z.min(other.min.z);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
        self.max.z = self.max.z.max(other.max.z);
    }

    /// Slab test; returns the entry parameter when the ray hits the box.
    fn ray_intersect(&self, origin: &Point3<f64>, dir_inv: &Vector3<f64>) -> Option<f64> {
        let t1 = (self.min.x - origin.x) * dir_inv.x;
        let t2 = (self.max.x - origin.x) * dir_inv.x;
        let t3 = (self.min.y - origin.y) * dir_inv.y;
        let t4 = (self.max.y - origin.y) * dir_inv.y;
        let t5 = (self.min.z - origin.z) * dir_inv.z;
        let t6 = (self.max.z - origin.z) * dir_inv.z;

        let t_min = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
        let t_max = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

        if t_max >= t_min && t_max >= 0.0 {
            Some(t_min.max(0.0))
        } else {
            None
        }
    }
}

#[derive(Debug)]
enum BvhNode {
    Leaf {
        aabb: Aabb,
        triangle: usize,
    },
    Internal {
        aabb: Aabb,
        left: Box<BvhNode>,
        right: Box<BvhNode>,
    },
}

impl BvhNode {
    fn build(triangles: &[FanTriangle], indices: &mut [usize]) -> Option<Self> {
        if indices.is_empty() {
            return None;
        }

        if indices.len() == 1 {
            let idx = indices[0];
            return Some(Self::Leaf {
                aabb: triangles[idx].aabb(),
                triangle: idx,
            });
        }

        let mut aabb = triangles[indices[0]].aabb();
        for &idx in indices.iter().skip(1) {
            aabb.expand(&triangles[idx].aabb());
        }

        // Median split along the longest extent.
        let extent = aabb.max - aabb.min;
        let axis = if extent.x >= extent.y && extent.x >= extent.z {
            0
        } else if extent.y >= extent.z {
            1
        } else {
            2
        };
        indices.sort_by(|&a, &b| {
            let ca = triangles[a].centroid()[axis];
            let cb = triangles[b].centroid()[axis];
            ca.partial_cmp(&cb).unwrap_or(std::cmp::Ordering::Equal)
        });

        let mid = indices.len() / 2;
        let (left_indices, right_indices) = indices.split_at_mut(mid);
        let left = Self::build(triangles, left_indices);
        let right = Self::build(triangles, right_indices);

        match (left, right) {
            (Some(l), Some(r)) => Some(Self::Internal {
                aabb,
                left: Box::new(l),
                right: Box::new(r),
            }),
            (Some(node), None) | (None, Some(node)) => Some(node),
            (None, None) => None,
        }
    }

    const fn aabb(&self) -> &Aabb {
        match self {
            Self::Leaf { aabb, .. } | Self::Internal { aabb, .. } => aabb,
        }
    }
}

/// Möller–Trumbore ray-triangle intersection.
#[allow(clippy::many_single_char_names)]
fn ray_triangle_intersect(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    tri: &FanTriangle,
) -> Option<f64> {
    let edge1 = tri.v1 - tri.v0;
    let edge2 = tri.v2 - tri.v0;

    let h = direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Ray is parallel to the triangle.
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = origin - tri.v0;
    let u = f * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * direction.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Cached spatial index over a [`PaintMesh`] snapshot.
///
/// Built once at stroke start (or once per batch of casts) and discarded
/// when the gesture ends; never reused across strokes, since the mesh may
/// have changed in between.
///
/// # Example
///
/// ```
/// use paint_brush::{MeshBvh, Ray};
/// use paint_types::{PaintMesh, Point3, Vector3};
///
/// let mut mesh = PaintMesh::new();
/// let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
/// let v2 = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
/// mesh.add_face(&[v0, v1, v2]);
///
/// let bvh = MeshBvh::build(&mesh);
/// let ray = Ray::new(Point3::new(0.5, 0.5, 1.0), Vector3::new(0.0, 0.0, -1.0));
/// let hit = bvh.cast(&ray).unwrap();
/// assert_eq!(hit.face, 0);
/// ```
#[derive(Debug)]
pub struct MeshBvh {
    root: Option<BvhNode>,
    triangles: Vec<FanTriangle>,
}

impl MeshBvh {
    /// Build the index from a mesh snapshot.
    ///
    /// Polygonal faces are fan-triangulated around their first corner;
    /// faces with fewer than three corners produce no triangles and can
    /// never be hit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32 by design; larger meshes are unsupported.
    pub fn build(mesh: &PaintMesh) -> Self {
        let mut triangles = Vec::new();

        for face in 0..mesh.face_count() as u32 {
            let verts = mesh.face_corner_vertices(face);
            if verts.len() < 3 {
                continue;
            }
            let Some(v0) = mesh.vertex_position(verts[0]) else {
                continue;
            };
            for i in 1..verts.len() - 1 {
                let (Some(v1), Some(v2)) = (
                    mesh.vertex_position(verts[i]),
                    mesh.vertex_position(verts[i + 1]),
                ) else {
                    continue;
                };
                triangles.push(FanTriangle { v0, v1, v2, face });
            }
        }

        let mut indices: Vec<usize> = (0..triangles.len()).collect();
        let root = BvhNode::build(&triangles, &mut indices);

        Self { root, triangles }
    }

    /// Number of fan triangles in the index.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the index holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Cast a ray and return the closest hit, if any.
    ///
    /// A miss is a normal outcome, reported as `None`.
    #[must_use]
    pub fn cast(&self, ray: &Ray) -> Option<RayHit> {
        let root = self.root.as_ref()?;
        let dir_inv = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let mut closest: Option<(f64, usize)> = None;
        self.trace(root, ray, &dir_inv, &mut closest);

        closest.map(|(t, idx)| {
            let tri = &self.triangles[idx];
            RayHit {
                point: ray.at(t),
                normal: tri.normal().unwrap_or_else(Vector3::zeros),
                face: tri.face,
                distance: t,
            }
        })
    }

    fn trace(
        &self,
        node: &BvhNode,
        ray: &Ray,
        dir_inv: &Vector3<f64>,
        closest: &mut Option<(f64, usize)>,
    ) {
        let Some(t_near) = node.aabb().ray_intersect(&ray.origin, dir_inv) else {
            return;
        };
        if closest.is_some_and(|(t, _)| t_near > t) {
            return;
        }

        match node {
            BvhNode::Leaf { triangle, .. } => {
                if let Some(t) =
                    ray_triangle_intersect(&ray.origin, &ray.direction, &self.triangles[*triangle])
                {
                    if closest.is_none_or(|(best, _)| t < best) {
                        *closest = Some((t, *triangle));
                    }
                }
            }
            BvhNode::Internal { left, right, .. } => {
                self.trace(left, ray, dir_inv, closest);
                self.trace(right, ray, dir_inv, closest);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn quad_strip() -> PaintMesh {
        // Two quads side by side in the z = 0 plane.
        let mut mesh = PaintMesh::new();
        for &(x, y) in &[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (2.0, 1.0),
        ] {
            mesh.add_vertex(Point3::new(x, y, 0.0));
        }
        mesh.add_face(&[0, 1, 4, 3]);
        mesh.add_face(&[1, 2, 5, 4]);
        mesh
    }

    fn down_ray(x: f64, y: f64) -> Ray {
        Ray::new(Point3::new(x, y, 5.0), Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn quads_are_fan_triangulated() {
        let bvh = MeshBvh::build(&quad_strip());
        assert_eq!(bvh.triangle_count(), 4);
    }

    #[test]
    fn hit_reports_owning_face() {
        let bvh = MeshBvh::build(&quad_strip());

        let hit = bvh.cast(&down_ray(0.5, 0.5)).unwrap();
        assert_eq!(hit.face, 0);

        let hit = bvh.cast(&down_ray(1.5, 0.5)).unwrap();
        assert_eq!(hit.face, 1);
    }

    #[test]
    fn hit_point_and_normal() {
        let bvh = MeshBvh::build(&quad_strip());
        let hit = bvh.cast(&down_ray(0.25, 0.25)).unwrap();

        assert!((hit.point.z).abs() < 1e-9);
        assert!((hit.distance - 5.0).abs() < 1e-9);
        assert!((hit.normal.z.abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn miss_is_none() {
        let bvh = MeshBvh::build(&quad_strip());
        assert!(bvh.cast(&down_ray(10.0, 10.0)).is_none());

        // Pointing away from the mesh.
        let up = Ray::new(Point3::new(0.5, 0.5, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(bvh.cast(&up).is_none());
    }

    #[test]
    fn closest_of_stacked_faces_wins() {
        let mut mesh = quad_strip();
        // A second quad floating above the first.
        for &(x, y) in &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            mesh.add_vertex(Point3::new(x, y, 2.0));
        }
        mesh.add_face(&[6, 7, 8, 9]);

        let bvh = MeshBvh::build(&mesh);
        let hit = bvh.cast(&down_ray(0.5, 0.5)).unwrap();
        assert_eq!(hit.face, 2);
        assert!((hit.distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_mesh_is_empty_index() {
        let bvh = MeshBvh::build(&PaintMesh::new());
        assert!(bvh.is_empty());
        assert!(bvh.cast(&down_ray(0.0, 0.0)).is_none());
    }
}
