use crate::geometry::Point;

/// Pan offset and zoom scale applied uniformly to all drawing and
/// inversely to pointer coordinates.
///
/// World-to-screen for drawing is delegated to the canvas transform
/// (translate then scale); only the inverse mapping lives here.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewTransform {
    /// Shift the view by a screen-space pointer delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Wheel zoom: scrolling down shrinks, up grows. Multiplicative and
    /// unclamped in both directions.
    pub fn zoom(&mut self, delta_y: f64) {
        self.scale *= if delta_y > 0.0 { 0.9 } else { 1.1 };
    }

    pub fn reset(&mut self) {
        *self = ViewTransform::default();
    }

    pub fn screen_to_world(&self, x: f64, y: f64) -> Point {
        Point {
            x: (x - self.offset_x) / self.scale,
            y: (y - self.offset_y) / self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_start() {
        let v = ViewTransform::default();
        let p = v.screen_to_world(7.0, 11.0);
        assert_eq!((p.x, p.y), (7.0, 11.0));
    }

    #[test]
    fn pan_accumulates() {
        let mut v = ViewTransform::default();
        v.pan(10.0, -5.0);
        v.pan(2.0, 3.0);
        assert_eq!((v.offset_x, v.offset_y), (12.0, -2.0));
        let p = v.screen_to_world(12.0, -2.0);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn zoom_is_multiplicative() {
        let mut v = ViewTransform::default();
        v.zoom(1.0);
        v.zoom(1.0);
        assert!((v.scale - 0.81).abs() < 1e-12);
        v.reset();
        v.zoom(-1.0);
        assert!((v.scale - 1.1).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_unclamped() {
        let mut v = ViewTransform::default();
        for _ in 0..100 {
            v.zoom(1.0);
        }
        assert!(v.scale > 0.0);
        assert!(v.scale < 1e-4);
    }

    #[test]
    fn screen_to_world_inverts_offset_then_scale() {
        let mut v = ViewTransform::default();
        v.pan(50.0, 20.0);
        v.zoom(-1.0); // scale 1.1
        let p = v.screen_to_world(72.0, 42.0);
        assert!((p.x - 20.0 / 1.1).abs() < 1e-12);
        assert!((p.y - 22.0 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_identity() {
        let mut v = ViewTransform::default();
        v.pan(9.0, 9.0);
        v.zoom(1.0);
        v.reset();
        assert_eq!(v.scale, 1.0);
        assert_eq!((v.offset_x, v.offset_y), (0.0, 0.0));
    }
}
