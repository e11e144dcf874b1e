use serde::{Deserialize, Serialize};

/// Hover hit radius in world units. Strict less-than: a point at exactly
/// this distance is not a hit.
pub const HOVER_RADIUS: f64 = 4.0;
/// Click hit radius in world units. Strict less-than, tighter than hover.
pub const CLICK_RADIUS: f64 = 3.0;

/// Basic two dimensional point used for geometry operations.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl From<[f64; 2]> for Point {
    fn from(v: [f64; 2]) -> Self {
        Point { x: v[0], y: v[1] }
    }
}

/// Distance from `p` to the closed segment `a`-`b`.
///
/// Projects `p` onto the segment's carrier line; the parameter clamps to
/// [0, 1] so the nearest point stays on the segment. A zero-length segment
/// collapses to its start point.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = p.x - a.x;
    let dy = p.y - a.y;
    let ex = b.x - a.x;
    let ey = b.y - a.y;

    let dot = dx * ex + dy * ey;
    let len_sq = ex * ex + ey * ey;
    let param = if len_sq != 0.0 { dot / len_sq } else { -1.0 };

    let (nx, ny) = if param < 0.0 {
        (a.x, a.y)
    } else if param > 1.0 {
        (b.x, b.y)
    } else {
        (a.x + param * ex, a.y + param * ey)
    };

    let rx = p.x - nx;
    let ry = p.y - ny;
    (rx * rx + ry * ry).sqrt()
}

pub fn midpoint(a: Point, b: Point) -> Point {
    Point {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn zero_on_the_segment() {
        assert_eq!(distance_to_segment(p(5.0, 0.0), p(0.0, 0.0), p(10.0, 0.0)), 0.0);
        assert_eq!(distance_to_segment(p(0.0, 0.0), p(0.0, 0.0), p(10.0, 0.0)), 0.0);
        assert_eq!(distance_to_segment(p(10.0, 0.0), p(0.0, 0.0), p(10.0, 0.0)), 0.0);
    }

    #[test]
    fn perpendicular_distance_inside_range() {
        assert_eq!(distance_to_segment(p(5.0, 3.0), p(0.0, 0.0), p(10.0, 0.0)), 3.0);
    }

    #[test]
    fn endpoint_distance_beyond_range() {
        // Beyond the start (t < 0): plain distance to the start point.
        assert_eq!(distance_to_segment(p(-3.0, 4.0), p(0.0, 0.0), p(10.0, 0.0)), 5.0);
        // Beyond the end (t > 1): plain distance to the end point.
        assert_eq!(distance_to_segment(p(13.0, 4.0), p(0.0, 0.0), p(10.0, 0.0)), 5.0);
    }

    #[test]
    fn degenerate_segment_measures_from_start() {
        let d = distance_to_segment(p(3.0, 4.0), p(0.0, 0.0), p(0.0, 0.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn diagonal_segment() {
        // Nearest point of (0,0)-(10,10) to (10,0) is (5,5).
        let d = distance_to_segment(p(10.0, 0.0), p(0.0, 0.0), p(10.0, 10.0));
        assert!((d - 50.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn midpoint_halves_both_axes() {
        let m = midpoint(p(0.0, 0.0), p(10.0, 4.0));
        assert_eq!(m.x, 5.0);
        assert_eq!(m.y, 2.0);
    }
}
