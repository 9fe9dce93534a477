//! Overlay renderer: holds the latest pose result and turns it into primitives.
//!
//! The renderer never draws by itself. Hosts call [`OverlayRenderer::render`]
//! when [`OverlayRenderer::take_repaint_request`] says the overlay changed, then
//! paint the primitives onto whatever surface backs the view.

use crate::error::{OverlayError, Result};
use crate::geometry::JointArc;
use crate::primitives::Primitive;
use crate::style::OverlayStyle;
use crate::topology::{SideChain, CROSS_BODY, LEFT_CHAIN, MIN_SIDE_LANDMARKS, RIGHT_CHAIN};
use crate::types::{Landmark, Point2, PoseResult, RunningMode};
use crate::visibility::SideVisibility;

/// Point markers use a fixed radius regardless of the point paint.
pub const POINT_RADIUS: f32 = 3.0;
pub const ARC_RADIUS: f32 = 12.0;
/// Label position relative to the arc center.
pub const LABEL_OFFSET: (f32, f32) = (3.0, 18.0);

/// Scale from image pixels to view pixels.
///
/// Still images and video fit inside the view; live streams fill it (the
/// preview is anchored top-left and cropped).
pub fn scale_factor(
    view_width: u32,
    view_height: u32,
    image_width: u32,
    image_height: u32,
    mode: RunningMode,
) -> f32 {
    let sx = view_width as f32 / image_width as f32;
    let sy = view_height as f32 / image_height as f32;
    match mode {
        RunningMode::Image | RunningMode::Video => sx.min(sy),
        RunningMode::LiveStream => sx.max(sy),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Empty,
    Populated,
}

/// Everything a render pass reads.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub result: Option<PoseResult>,
    pub image_width: u32,
    pub image_height: u32,
    pub view_width: u32,
    pub view_height: u32,
    pub scale_factor: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            result: None,
            image_width: 1,
            image_height: 1,
            view_width: 0,
            view_height: 0,
            scale_factor: 1.0,
        }
    }
}

impl RenderState {
    pub fn phase(&self) -> RenderPhase {
        if self.result.is_some() {
            RenderPhase::Populated
        } else {
            RenderPhase::Empty
        }
    }

    fn project(&self, lm: &Landmark) -> Point2 {
        Point2::new(
            lm.x * self.image_width as f32 * self.scale_factor,
            lm.y * self.image_height as f32 * self.scale_factor,
        )
    }
}

/// Single-writer overlay state. Results produced on another thread must be
/// handed over to the owning thread before calling [`Self::update_result`].
#[derive(Debug, Default)]
pub struct OverlayRenderer {
    state: RenderState,
    repaint_requested: bool,
}

impl OverlayRenderer {
    pub fn new(view_width: u32, view_height: u32) -> Self {
        Self {
            state: RenderState { view_width, view_height, ..RenderState::default() },
            repaint_requested: false,
        }
    }

    /// Records a new view size. The scale is picked up on the next result.
    pub fn set_view_size(&mut self, view_width: u32, view_height: u32) {
        self.state.view_width = view_width;
        self.state.view_height = view_height;
        self.repaint_requested = true;
    }

    /// Replaces the stored result wholesale and recomputes the scale.
    ///
    /// Landmark counts are not checked here; short sets fail at render time.
    pub fn update_result(
        &mut self,
        result: PoseResult,
        image_width: u32,
        image_height: u32,
        mode: RunningMode,
    ) {
        let scale = scale_factor(
            self.state.view_width,
            self.state.view_height,
            image_width,
            image_height,
            mode,
        );
        log::debug!(
            "Result with {} bodies, image {}x{}, {:?} scale {:.3}",
            result.landmarks.len(),
            image_width,
            image_height,
            mode,
            scale
        );
        self.state.result = Some(result);
        self.state.image_width = image_width;
        self.state.image_height = image_height;
        self.state.scale_factor = scale;
        self.repaint_requested = true;
    }

    /// Drops the stored result; the next pass paints nothing.
    pub fn clear(&mut self) {
        self.state.result = None;
        self.repaint_requested = true;
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn phase(&self) -> RenderPhase {
        self.state.phase()
    }

    /// Returns whether the overlay changed since the last call, and resets the flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    pub fn render(&self, style: &OverlayStyle) -> Result<Vec<Primitive>> {
        render(&self.state, style)
    }
}

/// Builds the primitives for every body in `state`. Empty state yields nothing.
///
/// Per body: side connectors and arcs first, then the point markers. A body
/// whose depth probes cannot be read, or a visible side that cannot be drawn,
/// fails the whole pass with [`OverlayError::IndexOutOfRange`].
pub fn render(state: &RenderState, style: &OverlayStyle) -> Result<Vec<Primitive>> {
    let mut out = Vec::new();
    let Some(result) = state.result.as_ref() else {
        return Ok(out);
    };

    for set in &result.landmarks {
        render_body(state, set, style, &mut out)?;
    }
    log::trace!("Render pass produced {} primitives", out.len());
    Ok(out)
}

fn render_body(
    state: &RenderState,
    set: &[Landmark],
    style: &OverlayStyle,
    out: &mut Vec<Primitive>,
) -> Result<()> {
    let sides = SideVisibility::classify(set)?;
    if sides.any() && set.len() < MIN_SIDE_LANDMARKS {
        return Err(OverlayError::IndexOutOfRange {
            index: MIN_SIDE_LANDMARKS - 1,
            len: set.len(),
        });
    }

    if sides.left {
        render_side(state, set, &LEFT_CHAIN, style, out);
    }
    if sides.right {
        render_side(state, set, &RIGHT_CHAIN, style, out);
    }
    if sides.full {
        render_side(state, set, &LEFT_CHAIN, style, out);
        render_side(state, set, &RIGHT_CHAIN, style, out);
        for &(a, b) in &CROSS_BODY {
            out.push(line(state, set, a, b, style));
        }
    }

    for index in sides.point_indices(set.len()) {
        out.push(Primitive::Circle {
            center: state.project(&set[index]),
            radius: POINT_RADIUS,
            paint: style.point,
        });
    }
    Ok(())
}

// Callers guarantee set.len() >= MIN_SIDE_LANDMARKS.
fn render_side(
    state: &RenderState,
    set: &[Landmark],
    chain: &SideChain,
    style: &OverlayStyle,
    out: &mut Vec<Primitive>,
) {
    for &(a, b) in &chain.bones {
        out.push(line(state, set, a, b, style));
    }
    for &(start, vertex, end) in &chain.arcs {
        let arc = JointArc::new(
            state.project(&set[start]),
            state.project(&set[vertex]),
            state.project(&set[end]),
        );
        push_arc(&arc, style, out);
    }
}

fn line(state: &RenderState, set: &[Landmark], a: usize, b: usize, style: &OverlayStyle) -> Primitive {
    Primitive::Line {
        from: state.project(&set[a]),
        to: state.project(&set[b]),
        paint: style.line,
    }
}

fn push_arc(arc: &JointArc, style: &OverlayStyle, out: &mut Vec<Primitive>) {
    out.push(Primitive::Arc {
        center: arc.center,
        radius: ARC_RADIUS,
        start_angle: arc.start_angle,
        sweep_angle: arc.sweep_angle,
        paint: style.arc,
    });
    out.push(Primitive::Text {
        origin: arc.center.offset(LABEL_OFFSET.0, LABEL_OFFSET.1),
        text: arc.label(),
        paint: style.label,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{count_kind, PrimitiveKind};
    use approx::assert_relative_eq;

    fn body(a: f32, b: f32) -> Vec<Landmark> {
        let mut set: Vec<Landmark> = (0..33)
            .map(|i| Landmark::new(0.1 + i as f32 * 0.02, 0.05 + i as f32 * 0.025, 0.0))
            .collect();
        set[25].z = a;
        set[26].z = b;
        set
    }

    fn populated(set: Vec<Landmark>) -> OverlayRenderer {
        let mut renderer = OverlayRenderer::new(640, 480);
        renderer.update_result(PoseResult::single(set), 640, 480, RunningMode::Image);
        renderer
    }

    #[test]
    fn test_scale_fit_and_fill() {
        assert_relative_eq!(scale_factor(1000, 500, 500, 1000, RunningMode::Image), 0.5);
        assert_relative_eq!(scale_factor(1000, 500, 500, 1000, RunningMode::Video), 0.5);
        assert_relative_eq!(scale_factor(1000, 500, 500, 1000, RunningMode::LiveStream), 2.0);
    }

    #[test]
    fn test_update_result_uses_view_size() {
        let mut renderer = OverlayRenderer::new(1000, 500);
        renderer.update_result(PoseResult::default(), 500, 1000, RunningMode::LiveStream);
        assert_relative_eq!(renderer.state().scale_factor, 2.0);
        assert_eq!(renderer.state().image_width, 500);
        assert_eq!(renderer.state().image_height, 1000);
    }

    #[test]
    fn test_view_resize_waits_for_next_result() {
        let mut renderer = populated(body(1.0, 1.0));
        renderer.set_view_size(320, 240);
        assert_relative_eq!(renderer.state().scale_factor, 1.0);

        renderer.update_result(PoseResult::single(body(1.0, 1.0)), 640, 480, RunningMode::Image);
        assert_relative_eq!(renderer.state().scale_factor, 0.5);
    }

    #[test]
    fn test_state_machine() {
        let mut renderer = OverlayRenderer::new(640, 480);
        assert_eq!(renderer.phase(), RenderPhase::Empty);
        assert!(renderer.render(&OverlayStyle::default()).unwrap().is_empty());

        renderer.update_result(PoseResult::single(body(-1.0, 1.0)), 640, 480, RunningMode::Image);
        assert_eq!(renderer.phase(), RenderPhase::Populated);
        renderer.update_result(PoseResult::single(body(1.0, 1.0)), 640, 480, RunningMode::Image);
        assert_eq!(renderer.phase(), RenderPhase::Populated);

        renderer.clear();
        assert_eq!(renderer.phase(), RenderPhase::Empty);
        renderer.clear();
        assert_eq!(renderer.phase(), RenderPhase::Empty);
    }

    #[test]
    fn test_clear_paints_nothing() {
        let mut renderer = populated(body(1.0, 1.0));
        assert!(!renderer.render(&OverlayStyle::default()).unwrap().is_empty());
        renderer.clear();
        assert!(renderer.render(&OverlayStyle::default()).unwrap().is_empty());
    }

    #[test]
    fn test_repaint_requests() {
        let mut renderer = OverlayRenderer::new(640, 480);
        assert!(!renderer.take_repaint_request());

        renderer.update_result(PoseResult::single(body(1.0, 1.0)), 640, 480, RunningMode::Image);
        assert!(renderer.take_repaint_request());
        assert!(!renderer.take_repaint_request());

        // rendering is a pure read
        renderer.render(&OverlayStyle::default()).unwrap();
        assert!(!renderer.take_repaint_request());

        renderer.clear();
        assert!(renderer.take_repaint_request());
    }

    #[test]
    fn test_left_body_counts() {
        let prims = populated(body(-1.0, 1.0)).render(&OverlayStyle::default()).unwrap();
        assert_eq!(count_kind(&prims, PrimitiveKind::Circle), 6);
        assert_eq!(count_kind(&prims, PrimitiveKind::Line), 5);
        assert_eq!(count_kind(&prims, PrimitiveKind::Arc), 4);
        assert_eq!(count_kind(&prims, PrimitiveKind::Text), 4);
    }

    #[test]
    fn test_right_body_uses_right_chain() {
        let set = body(1.0, -1.0);
        let prims = populated(set.clone()).render(&OverlayStyle::default()).unwrap();
        match &prims[0] {
            Primitive::Line { from, to, .. } => {
                assert_relative_eq!(from.x, set[28].x * 640.0);
                assert_relative_eq!(to.y, set[26].y * 480.0);
            }
            other => panic!("expected a line first, got {:?}", other),
        }
        assert_eq!(count_kind(&prims, PrimitiveKind::Circle), 6);
    }

    #[test]
    fn test_full_body_counts() {
        let prims = populated(body(0.2, 0.4)).render(&OverlayStyle::default()).unwrap();
        assert_eq!(count_kind(&prims, PrimitiveKind::Line), 12);
        assert_eq!(count_kind(&prims, PrimitiveKind::Arc), 8);
        assert_eq!(count_kind(&prims, PrimitiveKind::Text), 8);
        assert_eq!(count_kind(&prims, PrimitiveKind::Circle), 12);
    }

    #[test]
    fn test_fallback_draws_every_point() {
        let prims = populated(body(0.0, 0.0)).render(&OverlayStyle::default()).unwrap();
        assert_eq!(prims.len(), 33);
        assert!(prims.iter().all(|p| p.kind() == PrimitiveKind::Circle));
        for p in &prims {
            if let Primitive::Circle { radius, .. } = p {
                assert_relative_eq!(*radius, POINT_RADIUS);
            }
        }
    }

    #[test]
    fn test_short_set_fails() {
        let result = populated(vec![Landmark::default(); 20]).render(&OverlayStyle::default());
        assert!(matches!(
            result,
            Err(OverlayError::IndexOutOfRange { index: 25, len: 20 })
        ));
    }

    #[test]
    fn test_visible_side_needs_full_chain() {
        // probes readable but the ankles are missing
        let mut set = body(-1.0, 1.0);
        set.truncate(28);
        let result = populated(set).render(&OverlayStyle::default());
        assert!(matches!(
            result,
            Err(OverlayError::IndexOutOfRange { index: 28, len: 28 })
        ));
    }

    #[test]
    fn test_fallback_with_probes_only() {
        // a 27-point set with zero depths needs no chain landmarks
        let mut set = body(0.0, 0.0);
        set.truncate(27);
        let prims = populated(set).render(&OverlayStyle::default()).unwrap();
        assert_eq!(prims.len(), 27);
    }

    #[test]
    fn test_every_body_rendered() {
        let mut renderer = OverlayRenderer::new(640, 480);
        let result = PoseResult { landmarks: vec![body(-1.0, 1.0), body(1.0, -1.0)] };
        renderer.update_result(result, 640, 480, RunningMode::Video);
        let prims = renderer.render(&OverlayStyle::default()).unwrap();
        assert_eq!(count_kind(&prims, PrimitiveKind::Circle), 12);
        assert_eq!(count_kind(&prims, PrimitiveKind::Line), 10);
    }
}
