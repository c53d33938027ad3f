//! Shape rasterization onto document bitmaps using tiny-skia
//!
//! Two projections share the path-building code here:
//! - [`preview`]: translucent live preview, redrawn on every session change
//! - [`bake`]: fully opaque, irreversible compositing into a new bitmap

pub mod bake;
pub mod preview;

use image::RgbaImage;
use tiny_skia::{Path, PathBuilder, Pixmap};

use crate::domain::geometry::{BEZIER_K, Point};

/// Paint constants shared by the preview projection
pub(crate) mod style {
    /// Translucent fill alpha for not-yet-baked regions (~70%)
    pub const PREVIEW_FILL_ALPHA: u8 = 178;
    /// Border / freehand stroke alpha for the preview (~90%)
    pub const PREVIEW_STROKE_ALPHA: u8 = 230;
    /// Border stroke width around rectangle/ellipse previews
    pub const PREVIEW_BORDER_WIDTH: f32 = 2.0;
}

/// Convert an RgbaImage to a Pixmap, apply a drawing function, and copy back.
///
/// Document scans are opaque, so the straight/premultiplied alpha
/// representations coincide and the raw buffer can be shared directly.
pub(crate) fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    img.copy_from_slice(pixmap.data());
}

/// Build a closed rectangle path from a normalized bounding box
pub(crate) fn build_rect_path(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<Path> {
    if !(max_x > min_x && max_y > min_y) {
        return None;
    }
    let rect = tiny_skia::Rect::from_ltrb(min_x, min_y, max_x, max_y)?;
    Some(PathBuilder::from_rect(rect))
}

/// Build an ellipse path using cubic bezier curves
pub(crate) fn build_ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<Path> {
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    let kx = rx * BEZIER_K;
    let ky = ry * BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at top
    pb.move_to(cx, cy - ry);

    // Top to right
    pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);

    // Right to bottom
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);

    // Bottom to left
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);

    // Left to top
    pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);

    pb.close();
    pb.finish()
}

/// Build a polyline path through a freehand pointer trail.
///
/// A single-point path gets a zero-length segment so the round caps render
/// it as a dot of the stroke width.
pub(crate) fn build_freehand_path(points: &[Point]) -> Option<Path> {
    let first = points.first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    if points.len() == 1 {
        pb.line_to(first.x, first.y);
    } else {
        for point in &points[1..] {
            pb.line_to(point.x, point.y);
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_path_rejects_empty_box() {
        assert!(build_rect_path(10.0, 10.0, 10.0, 10.0).is_none());
        assert!(build_rect_path(10.0, 10.0, 20.0, 30.0).is_some());
    }

    #[test]
    fn ellipse_path_rejects_zero_radii() {
        assert!(build_ellipse_path(50.0, 50.0, 0.0, 10.0).is_none());
        assert!(build_ellipse_path(50.0, 50.0, 10.0, 10.0).is_some());
    }

    #[test]
    fn freehand_path_handles_single_point() {
        assert!(build_freehand_path(&[]).is_none());
        assert!(build_freehand_path(&[Point::new(5.0, 5.0)]).is_some());
    }
}
