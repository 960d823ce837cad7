//! Drag-gesture stroke painting.
//!
//! A stroke is a sequence of pointer events: one begin, any number of
//! moves, one end (or a cancel). Pointer events arrive at whatever rate
//! the host delivers them, so each move is resampled into evenly spaced
//! screen points and every sample is ray cast and painted. The spatial
//! index is built once at stroke start and reused for the whole gesture;
//! painting only changes colors, never geometry, so the index stays valid.

use tracing::{debug, info};

use paint_types::{Color, PaintMesh, SelectionMask};

use crate::ops::paint_face;
use crate::raycast::MeshBvh;
use crate::view::{ScreenPoint, ViewProjection};

/// Screen-space distance between stroke samples, in pixels.
const SAMPLE_SPACING: f64 = 2.0;

/// An in-flight stroke gesture.
#[derive(Debug)]
struct ActiveStroke {
    bvh: MeshBvh,
    color: Color,
    last: ScreenPoint,
}

#[derive(Debug)]
enum State {
    Idle,
    Stroking(ActiveStroke),
}

/// Rasterizes a drag gesture into painted faces.
///
/// The rasterizer is an explicit two-state machine: it is either idle or
/// carrying an active stroke. Move events while idle are ignored, and a
/// second [`begin`](Self::begin) while stroking abandons the old gesture
/// and starts fresh.
///
/// Each sample point is cast into the mesh; a hit paints every corner of
/// the struck face solid with the stroke color, provided the mask selects
/// the face. Misses are skipped, so a stroke can slide off the silhouette
/// and back on without ending the gesture.
///
/// Only the mask's *face* set confines strokes: painting operates on whole
/// faces, so a vertex-only mask leaves strokes unconfined. Hosts that want
/// face-select state to gate stroke painting must populate the face set
/// (see [`SelectionMask::with_faces`]).
#[derive(Debug, Default)]
pub struct StrokeRasterizer {
    state: State,
}

impl Default for State {
    fn default() -> Self {
        Self::Idle
    }
}

impl StrokeRasterizer {
    /// Create an idle rasterizer.
    #[must_use]
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Check whether a stroke is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, State::Stroking(_))
    }

    /// Start a stroke at a screen point.
    ///
    /// Builds the spatial index from the current mesh and paints the face
    /// under the starting point. If a stroke is already in flight it is
    /// abandoned and a new one starts here.
    pub fn begin(
        &mut self,
        mesh: &mut PaintMesh,
        view: &impl ViewProjection,
        point: ScreenPoint,
        color: Color,
        mask: &SelectionMask,
    ) {
        if self.is_active() {
            debug!("begin while stroking; restarting gesture");
        }

        let bvh = MeshBvh::build(mesh);
        info!(
            triangles = bvh.triangle_count(),
            x = point.x,
            y = point.y,
            "stroke started"
        );

        let mut stroke = ActiveStroke {
            bvh,
            color,
            last: point,
        };
        paint_segment(&mut stroke, mesh, view, point, point, mask);
        self.state = State::Stroking(stroke);
    }

    /// Continue the stroke to a new screen point.
    ///
    /// The segment from the previous point is resampled at roughly
    /// two-pixel intervals and each sample is painted. A move while idle
    /// does nothing.
    pub fn move_to(
        &mut self,
        mesh: &mut PaintMesh,
        view: &impl ViewProjection,
        point: ScreenPoint,
        mask: &SelectionMask,
    ) {
        let State::Stroking(ref mut stroke) = self.state else {
            return;
        };
        let from = stroke.last;
        paint_segment(stroke, mesh, view, from, point, mask);
        stroke.last = point;
    }

    /// Finish the stroke and drop the cached index.
    pub fn end(&mut self) {
        if self.is_active() {
            info!("stroke ended");
        }
        self.state = State::Idle;
    }

    /// Abandon the stroke without further painting.
    ///
    /// Painting already done by earlier samples stays; undo is the host's
    /// concern.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

/// Paint evenly spaced samples along one screen-space segment.
///
/// A zero-length segment still paints one sample at its midpoint, which
/// is how the initial press paints the face under the cursor.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn paint_segment(
    stroke: &mut ActiveStroke,
    mesh: &mut PaintMesh,
    view: &impl ViewProjection,
    from: ScreenPoint,
    to: ScreenPoint,
    mask: &SelectionMask,
) {
    let distance = from.distance_to(to);
    let samples = ((distance / SAMPLE_SPACING).floor() as usize).max(1);

    for i in 0..samples {
        let t = if samples == 1 {
            0.5
        } else {
            i as f64 / (samples - 1) as f64
        };
        let sample = from.lerp(to, t);
        let ray = view.screen_ray(sample);
        if let Some(hit) = stroke.bvh.cast(&ray) {
            paint_face(mesh, hit.face, stroke.color, mask);
        }
    }
}
