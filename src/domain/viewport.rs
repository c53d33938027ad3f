//! Display-space to native-pixel-space coordinate mapping
//!
//! The host reports the rendered bounding box of the drawing surface with
//! every pointer event. Zoom, pan, or a container resize can change that box
//! between events, so a mapper is built fresh per event and never cached.

use crate::error::RedactError;

use super::geometry::Point;

/// Rendered bounding box of the drawing surface, in display pixels.
///
/// Mirrors what the host reads off its layout system immediately before
/// forwarding a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Converts pointer coordinates between display space and the document's
/// native pixel space.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    left: f32,
    top: f32,
    scale_x: f32,
    scale_y: f32,
}

impl CoordinateMapper {
    /// Build a mapper for a document of `native_width` x `native_height`
    /// pixels rendered inside `viewport`.
    ///
    /// Fails closed with [`RedactError::DegenerateTransform`] when the
    /// surface has not been laid out yet (zero or non-finite size), so no
    /// NaN/Infinity coordinate can reach the shape model.
    pub fn new(
        viewport: Viewport,
        native_width: u32,
        native_height: u32,
    ) -> Result<Self, RedactError> {
        if !(viewport.left.is_finite()
            && viewport.top.is_finite()
            && viewport.width.is_finite()
            && viewport.height.is_finite())
            || viewport.width <= 0.0
            || viewport.height <= 0.0
            || native_width == 0
            || native_height == 0
        {
            return Err(RedactError::DegenerateTransform);
        }
        Ok(Self {
            left: viewport.left,
            top: viewport.top,
            scale_x: native_width as f32 / viewport.width,
            scale_y: native_height as f32 / viewport.height,
        })
    }

    /// Map a display-space pointer position into native pixel space.
    pub fn to_native(&self, display: Point) -> Point {
        Point::new(
            (display.x - self.left) * self.scale_x,
            (display.y - self.top) * self.scale_y,
        )
    }

    /// Map a native-pixel-space point back onto the display, for any
    /// overlay-to-screen need.
    pub fn to_display(&self, native: Point) -> Point {
        Point::new(
            native.x / self.scale_x + self.left,
            native.y / self.scale_y + self.top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_display_to_native_at_half_scale() {
        // 1000x800 native shown at 500x400
        let mapper =
            CoordinateMapper::new(Viewport::new(0.0, 0.0, 500.0, 400.0), 1000, 800).unwrap();
        assert_eq!(
            mapper.to_native(Point::new(100.0, 100.0)),
            Point::new(200.0, 200.0)
        );
        assert_eq!(
            mapper.to_native(Point::new(200.0, 150.0)),
            Point::new(400.0, 300.0)
        );
    }

    #[test]
    fn accounts_for_surface_offset() {
        let mapper =
            CoordinateMapper::new(Viewport::new(50.0, 20.0, 500.0, 400.0), 1000, 800).unwrap();
        assert_eq!(
            mapper.to_native(Point::new(50.0, 20.0)),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn round_trips_within_a_pixel() {
        let mapper =
            CoordinateMapper::new(Viewport::new(13.5, 7.25, 641.0, 479.0), 2481, 3507).unwrap();
        let original = Point::new(123.75, 456.5);
        let back = mapper.to_display(mapper.to_native(original));
        assert!((back.x - original.x).abs() < 1.0);
        assert!((back.y - original.y).abs() < 1.0);
    }

    #[test]
    fn zero_sized_viewport_fails_closed() {
        assert!(CoordinateMapper::new(Viewport::new(0.0, 0.0, 0.0, 400.0), 1000, 800).is_err());
        assert!(CoordinateMapper::new(Viewport::new(0.0, 0.0, 500.0, 0.0), 1000, 800).is_err());
    }

    #[test]
    fn non_finite_viewport_fails_closed() {
        assert!(
            CoordinateMapper::new(Viewport::new(f32::NAN, 0.0, 500.0, 400.0), 1000, 800).is_err()
        );
        assert!(
            CoordinateMapper::new(Viewport::new(0.0, 0.0, f32::INFINITY, 400.0), 1000, 800)
                .is_err()
        );
    }

    #[test]
    fn zero_native_resolution_fails_closed() {
        assert!(CoordinateMapper::new(Viewport::new(0.0, 0.0, 500.0, 400.0), 0, 800).is_err());
    }
}
