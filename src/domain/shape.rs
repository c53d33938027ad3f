//! Redaction shape types
//!
//! All shape coordinates are stored in the *native* pixel space of the
//! document's base image, never in on-screen pixels. This keeps shapes
//! resolution-independent across zoom, pan, and container resizes.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, normalize_rect};

/// Unique, creation-ordered handle for a shape within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

/// Kind of redaction shape the user can draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned box spanned by anchor/cursor
    Rectangle,
    /// Ellipse inscribed in the anchor/cursor bounding box
    Ellipse,
    /// Stroked polyline through a captured pointer path
    Freehand,
}

/// One user-drawn redaction annotation, not yet baked.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactionShape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// First pointer-down position
    pub anchor: Point,
    /// Latest pointer position
    pub cursor: Point,
    /// Captured pointer path; populated only for [`ShapeKind::Freehand`],
    /// append-only while drawing
    pub path: Vec<Point>,
    /// Stroke width for freehand rendering, fixed at creation time from the
    /// active tool setting
    pub stroke_width: f32,
}

impl RedactionShape {
    /// Start a new shape at `point` with both anchor and cursor coincident
    /// (a one-element path for freehand).
    pub fn begin(id: ShapeId, kind: ShapeKind, point: Point, stroke_width: f32) -> Self {
        let path = match kind {
            ShapeKind::Freehand => vec![point],
            _ => Vec::new(),
        };
        Self {
            id,
            kind,
            anchor: point,
            cursor: point,
            path,
            stroke_width,
        }
    }

    /// Extend the shape with a new pointer position: moves the cursor for
    /// rectangle/ellipse, appends to the path for freehand.
    pub fn extend(&mut self, point: Point) {
        self.cursor = point;
        if self.kind == ShapeKind::Freehand {
            self.path.push(point);
        }
    }

    /// Normalized bounding box `(min_x, min_y, max_x, max_y)` of the
    /// anchor/cursor span.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        normalize_rect(self.anchor, self.cursor)
    }
}
