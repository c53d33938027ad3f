//! Compositing committed shapes into permanent pixel data
//!
//! Baking rasterizes every committed shape as fully opaque black into a new
//! bitmap of the same native resolution and clears the session. The
//! operation is cumulative and one-directional: a later bake paints on top
//! of an earlier bake's output, and pixels obscured by an earlier bake
//! cannot be recovered. Hosts confirm with the user before invoking it.

use image::RgbaImage;
use tiny_skia::{Color, FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};

use crate::domain::geometry::ellipse_from_bounds;
use crate::domain::shape::{RedactionShape, ShapeKind};
use crate::error::RedactError;
use crate::session::state::RedactionSession;

use super::{build_ellipse_path, build_freehand_path, with_pixmap};

/// Bake the session's committed shapes into a new bitmap.
///
/// Fails with [`RedactError::EmptyRedaction`] when nothing has been
/// committed; otherwise returns the new image and clears the session. The
/// input image is left untouched so the caller can swap references
/// atomically.
pub fn bake(session: &mut RedactionSession, base: &RgbaImage) -> Result<RgbaImage, RedactError> {
    if session.shapes().is_empty() {
        return Err(RedactError::EmptyRedaction);
    }

    let mut out = base.clone();
    with_pixmap(&mut out, |pixmap| {
        for shape in session.shapes() {
            draw_shape_opaque(pixmap, shape);
        }
    });

    log::debug!(
        "baked {} shapes into {}x{} bitmap",
        session.shapes().len(),
        out.width(),
        out.height()
    );
    session.clear();
    Ok(out)
}

// Anti-aliasing stays off: redaction coverage must be binary, with no
// partially blended pixels along shape boundaries.
fn opaque_paint() -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(Color::BLACK);
    paint
}

fn draw_shape_opaque(pixmap: &mut Pixmap, shape: &RedactionShape) {
    let (min_x, min_y, max_x, max_y) = shape.bounds();

    match shape.kind {
        ShapeKind::Rectangle => {
            if let Some(rect) =
                tiny_skia::Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
            {
                pixmap.fill_rect(rect, &opaque_paint(), Transform::identity(), None);
            }
        }
        ShapeKind::Ellipse => {
            let (cx, cy, rx, ry) = ellipse_from_bounds(min_x, min_y, max_x, max_y);
            if let Some(path) = build_ellipse_path(cx, cy, rx, ry) {
                pixmap.fill_path(
                    &path,
                    &opaque_paint(),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }
        ShapeKind::Freehand => {
            if let Some(path) = build_freehand_path(&shape.path) {
                let stroke = Stroke {
                    width: shape.stroke_width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &opaque_paint(), &stroke, Transform::identity(), None);
            }
        }
    }
}
