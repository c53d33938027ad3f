//! Mutable per-page redaction state

use crate::domain::geometry::Point;
use crate::domain::shape::{RedactionShape, ShapeId, ShapeKind};

/// The mutable drawing state for the active document page.
///
/// Committed shapes are kept in insertion order, which is also paint order
/// and undo order. At most one shape is in progress at a time. Every
/// effective mutation bumps [`RedactionSession::revision`]; the controller
/// uses that to raise explicit redraw notifications, so the preview redraw
/// contract stays deterministic instead of relying on an implicit reactive
/// trigger.
#[derive(Clone, Debug, Default)]
pub struct RedactionSession {
    shapes: Vec<RedactionShape>,
    in_progress: Option<RedactionShape>,
    next_id: u64,
    revision: u64,
}

impl RedactionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed shapes, in insertion (= paint = undo) order
    pub fn shapes(&self) -> &[RedactionShape] {
        &self.shapes
    }

    /// The shape currently being drawn, if any
    pub fn in_progress(&self) -> Option<&RedactionShape> {
        self.in_progress.as_ref()
    }

    /// True while a shape is being drawn
    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    /// True when there is nothing committed and nothing in progress
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.in_progress.is_none()
    }

    /// Monotonic counter bumped by every effective mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Start drawing a new shape at `point` (native pixel space).
    ///
    /// A shape that was still in progress is replaced; the pointer protocol
    /// commits on pointer-up/leave, so this only happens when the host loses
    /// an up event.
    pub fn begin_shape(&mut self, kind: ShapeKind, point: Point, stroke_width: f32) {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.in_progress = Some(RedactionShape::begin(id, kind, point, stroke_width));
        self.revision += 1;
    }

    /// Extend the in-progress shape with a new pointer position. No-op if
    /// nothing is in progress.
    pub fn extend_shape(&mut self, point: Point) {
        if let Some(shape) = self.in_progress.as_mut() {
            shape.extend(point);
            self.revision += 1;
        }
    }

    /// Move the in-progress shape into the committed list, preserving
    /// creation order. No-op if nothing is in progress.
    pub fn commit_shape(&mut self) {
        if let Some(shape) = self.in_progress.take() {
            self.shapes.push(shape);
            self.revision += 1;
        }
    }

    /// Remove the most recently committed shape, regardless of its kind.
    /// No-op on an empty list.
    pub fn undo_last(&mut self) {
        if self.shapes.pop().is_some() {
            self.revision += 1;
        }
    }

    /// Discard all committed and in-progress shapes (used on navigation and
    /// after a bake).
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.shapes.clear();
            self.in_progress = None;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn begin_extend_commit_appends_in_order() {
        let mut session = RedactionSession::new();
        session.begin_shape(ShapeKind::Rectangle, p(0.0, 0.0), 16.0);
        assert!(session.is_drawing());
        session.extend_shape(p(10.0, 10.0));
        session.commit_shape();
        session.begin_shape(ShapeKind::Ellipse, p(5.0, 5.0), 16.0);
        session.commit_shape();

        assert!(!session.is_drawing());
        assert_eq!(session.shapes().len(), 2);
        assert_eq!(session.shapes()[0].kind, ShapeKind::Rectangle);
        assert_eq!(session.shapes()[1].kind, ShapeKind::Ellipse);
        assert!(session.shapes()[0].id < session.shapes()[1].id);
    }

    #[test]
    fn undo_removes_lifo_and_is_noop_when_empty() {
        let mut session = RedactionSession::new();
        for i in 0..4 {
            session.begin_shape(ShapeKind::Rectangle, p(i as f32, 0.0), 16.0);
            session.commit_shape();
        }
        let first_three: Vec<ShapeId> = session.shapes()[..3].iter().map(|s| s.id).collect();

        session.undo_last();
        let remaining: Vec<ShapeId> = session.shapes().iter().map(|s| s.id).collect();
        assert_eq!(remaining, first_three);

        session.undo_last();
        session.undo_last();
        session.undo_last();
        assert!(session.shapes().is_empty());

        let rev = session.revision();
        session.undo_last();
        assert!(session.shapes().is_empty());
        assert_eq!(session.revision(), rev);
    }

    #[test]
    fn extend_and_commit_are_noops_without_in_progress() {
        let mut session = RedactionSession::new();
        let rev = session.revision();
        session.extend_shape(p(1.0, 1.0));
        session.commit_shape();
        assert_eq!(session.revision(), rev);
        assert!(session.is_empty());
    }

    #[test]
    fn clear_discards_committed_and_in_progress() {
        let mut session = RedactionSession::new();
        session.begin_shape(ShapeKind::Freehand, p(0.0, 0.0), 8.0);
        session.commit_shape();
        session.begin_shape(ShapeKind::Rectangle, p(1.0, 1.0), 16.0);
        session.clear();
        assert!(session.is_empty());

        let rev = session.revision();
        session.clear();
        assert_eq!(session.revision(), rev);
    }

    #[test]
    fn every_effective_mutation_bumps_revision() {
        let mut session = RedactionSession::new();
        let r0 = session.revision();
        session.begin_shape(ShapeKind::Freehand, p(0.0, 0.0), 8.0);
        let r1 = session.revision();
        session.extend_shape(p(1.0, 0.0));
        let r2 = session.revision();
        session.commit_shape();
        let r3 = session.revision();
        assert!(r0 < r1 && r1 < r2 && r2 < r3);
    }
}
