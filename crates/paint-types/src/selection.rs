//! Host-supplied selection masks.

use hashbrown::HashSet;

/// Paint-mask selection state supplied by the host.
///
/// Either mask may be absent, in which case every element of that kind is
/// eligible. When a mask is present, the flood-fill engine uses it to gate
/// *recording* of corners (traversal still passes through unselected
/// geometry), and the stroke rasterizer uses the face mask to gate which
/// faces a stroke may paint.
///
/// # Example
///
/// ```
/// use paint_types::SelectionMask;
///
/// let mask = SelectionMask::none().with_faces([0, 2]);
/// assert!(mask.is_face_selected(0));
/// assert!(!mask.is_face_selected(1));
/// // No vertex mask: every vertex is eligible.
/// assert!(mask.is_vertex_selected(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionMask {
    /// Selected face indices; `None` means the face mask is inactive.
    pub faces: Option<HashSet<u32>>,

    /// Selected vertex indices; `None` means the vertex mask is inactive.
    pub vertices: Option<HashSet<u32>>,
}

impl SelectionMask {
    /// A mask with neither face nor vertex selection active.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Activate the face mask with the given selected faces.
    #[must_use]
    pub fn with_faces(mut self, faces: impl IntoIterator<Item = u32>) -> Self {
        self.faces = Some(faces.into_iter().collect());
        self
    }

    /// Activate the vertex mask with the given selected vertices.
    #[must_use]
    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = u32>) -> Self {
        self.vertices = Some(vertices.into_iter().collect());
        self
    }

    /// Whether a face is eligible. `true` when the face mask is inactive.
    #[must_use]
    pub fn is_face_selected(&self, face: u32) -> bool {
        self.faces.as_ref().is_none_or(|set| set.contains(&face))
    }

    /// Whether a vertex is eligible. `true` when the vertex mask is inactive.
    #[must_use]
    pub fn is_vertex_selected(&self, vertex: u32) -> bool {
        self.vertices
            .as_ref()
            .is_none_or(|set| set.contains(&vertex))
    }

    /// Whether any mask is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.faces.is_some() || self.vertices.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_mask_selects_everything() {
        let mask = SelectionMask::none();
        assert!(!mask.is_active());
        assert!(mask.is_face_selected(42));
        assert!(mask.is_vertex_selected(42));
    }

    #[test]
    fn face_mask_gates_faces_only() {
        let mask = SelectionMask::none().with_faces([1]);
        assert!(mask.is_active());
        assert!(mask.is_face_selected(1));
        assert!(!mask.is_face_selected(2));
        assert!(mask.is_vertex_selected(2));
    }

    #[test]
    fn vertex_mask_gates_vertices_only() {
        let mask = SelectionMask::none().with_vertices([3, 4]);
        assert!(mask.is_vertex_selected(3));
        assert!(!mask.is_vertex_selected(5));
        assert!(mask.is_face_selected(0));
    }
}
