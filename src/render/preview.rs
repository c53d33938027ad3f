//! Live preview rendering
//!
//! Projects the base image plus every shape of a session into a fresh bitmap
//! on each invalidation. Shapes use a translucent fill so the user can tell
//! not-yet-permanent redaction apart from baked regions, which are fully
//! opaque. The projection is pure: the same session and base image always
//! produce the same pixels.

use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};

use crate::domain::geometry::ellipse_from_bounds;
use crate::domain::shape::{RedactionShape, ShapeKind};
use crate::session::state::RedactionSession;

use super::style::{PREVIEW_BORDER_WIDTH, PREVIEW_FILL_ALPHA, PREVIEW_STROKE_ALPHA};
use super::{build_ellipse_path, build_freehand_path, build_rect_path, with_pixmap};

/// Render the session's preview onto a copy of the base image.
///
/// Draw order: committed shapes in insertion order, then the in-progress
/// shape last/topmost. The base image is not mutated.
pub fn render_preview(base: &RgbaImage, session: &RedactionSession) -> RgbaImage {
    let mut out = base.clone();
    with_pixmap(&mut out, |pixmap| {
        for shape in session.shapes() {
            draw_shape_preview(pixmap, shape);
        }
        if let Some(shape) = session.in_progress() {
            draw_shape_preview(pixmap, shape);
        }
    });
    out
}

fn fill_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, PREVIEW_FILL_ALPHA);
    paint.anti_alias = true;
    paint
}

fn stroke_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, PREVIEW_STROKE_ALPHA);
    paint.anti_alias = true;
    paint
}

fn draw_shape_preview(pixmap: &mut Pixmap, shape: &RedactionShape) {
    let (min_x, min_y, max_x, max_y) = shape.bounds();

    match shape.kind {
        ShapeKind::Rectangle => {
            let Some(path) = build_rect_path(min_x, min_y, max_x, max_y) else {
                return;
            };
            pixmap.fill_path(
                &path,
                &fill_paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
            let stroke = Stroke {
                width: PREVIEW_BORDER_WIDTH,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &stroke_paint(), &stroke, Transform::identity(), None);
        }
        ShapeKind::Ellipse => {
            let (cx, cy, rx, ry) = ellipse_from_bounds(min_x, min_y, max_x, max_y);
            let Some(path) = build_ellipse_path(cx, cy, rx, ry) else {
                return;
            };
            pixmap.fill_path(
                &path,
                &fill_paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
            let stroke = Stroke {
                width: PREVIEW_BORDER_WIDTH,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &stroke_paint(), &stroke, Transform::identity(), None);
        }
        ShapeKind::Freehand => {
            let Some(path) = build_freehand_path(&shape.path) else {
                return;
            };
            let stroke = Stroke {
                width: shape.stroke_width,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &stroke_paint(), &stroke, Transform::identity(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Point;

    fn white_image(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn rendering_same_session_twice_is_byte_identical() {
        let base = white_image(200, 150);
        let mut session = RedactionSession::new();
        session.begin_shape(ShapeKind::Rectangle, Point::new(10.0, 10.0), 16.0);
        session.extend_shape(Point::new(80.0, 60.0));
        session.commit_shape();
        session.begin_shape(ShapeKind::Freehand, Point::new(20.0, 100.0), 8.0);
        session.extend_shape(Point::new(150.0, 100.0));

        let first = render_preview(&base, &session);
        let second = render_preview(&base, &session);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn preview_does_not_mutate_base_image() {
        let base = white_image(100, 100);
        let pristine = base.clone();
        let mut session = RedactionSession::new();
        session.begin_shape(ShapeKind::Ellipse, Point::new(10.0, 10.0), 16.0);
        session.extend_shape(Point::new(90.0, 90.0));
        session.commit_shape();

        let _ = render_preview(&base, &session);
        assert_eq!(base.as_raw(), pristine.as_raw());
    }

    #[test]
    fn preview_fill_is_translucent_not_opaque() {
        let base = white_image(100, 100);
        let mut session = RedactionSession::new();
        session.begin_shape(ShapeKind::Rectangle, Point::new(20.0, 20.0), 16.0);
        session.extend_shape(Point::new(80.0, 80.0));
        session.commit_shape();

        let preview = render_preview(&base, &session);
        let inside = preview.get_pixel(50, 50);
        // Translucent black over white leaves the underlying image visible
        assert!(inside[0] > 0 && inside[0] < 255);
        // Untouched corner stays white
        assert_eq!(preview.get_pixel(5, 5), &image::Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn in_progress_shape_is_drawn_on_top() {
        let base = white_image(100, 100);
        let mut session = RedactionSession::new();
        session.begin_shape(ShapeKind::Rectangle, Point::new(10.0, 10.0), 16.0);
        session.extend_shape(Point::new(60.0, 60.0));

        let preview = render_preview(&base, &session);
        let inside = preview.get_pixel(30, 30);
        assert!(inside[0] < 255);
    }

    #[test]
    fn empty_session_preview_equals_base() {
        let base = white_image(64, 64);
        let session = RedactionSession::new();
        let preview = render_preview(&base, &session);
        assert_eq!(preview.as_raw(), base.as_raw());
    }
}
