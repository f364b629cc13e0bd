//! Clock-face geometry shared by the face renderer and the canvas painter.
//!
//! All angles facing the rest of the crate are in degrees measured clockwise
//! from the 12 o'clock position, matching how an analog dial is read. The
//! conversion to the math convention (counter-clockwise from 3 o'clock,
//! y growing upward) happens here and nowhere else.

/// A point in the host's 2D coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    std::f64::consts::PI * deg / 180.0
}

/// Converts a clockwise-from-noon angle to math-convention radians.
pub fn clock_angle_rad(deg_from_noon: f64) -> f64 {
    deg_to_rad(90.0 - deg_from_noon)
}

/// Point on a circle at `deg_from_noon` degrees clockwise from 12 o'clock.
pub fn point_on_circle(center: Point, radius: f64, deg_from_noon: f64) -> Point {
    let a = clock_angle_rad(deg_from_noon);
    Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// `count` equally spaced points around a circle, starting `offset_deg`
/// past 12 o'clock and proceeding clockwise. Angle per point is 360/count.
pub fn points_on_circle(center: Point, radius: f64, count: usize, offset_deg: f64) -> Vec<Point> {
    let step = 360.0 / count as f64;
    (0..count)
        .map(|i| point_on_circle(center, radius, i as f64 * step + offset_deg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_deg_to_rad() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < EPS);
        assert!((deg_to_rad(0.0)).abs() < EPS);
    }

    #[test]
    fn test_noon_points_straight_up() {
        let p = point_on_circle(Point::new(0.0, 0.0), 10.0, 0.0);
        assert_close(p, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_quarter_turns_go_clockwise() {
        let c = Point::new(0.0, 0.0);
        assert_close(point_on_circle(c, 10.0, 90.0), Point::new(10.0, 0.0));
        assert_close(point_on_circle(c, 10.0, 180.0), Point::new(0.0, -10.0));
        assert_close(point_on_circle(c, 10.0, 270.0), Point::new(-10.0, 0.0));
    }

    #[test]
    fn test_points_on_circle_count_and_spacing() {
        let c = Point::new(5.0, 5.0);
        let pts = points_on_circle(c, 2.0, 60, 0.0);
        assert_eq!(pts.len(), 60);
        // first point at noon, 15th index (90 degrees) at 3 o'clock
        assert_close(pts[0], Point::new(5.0, 7.0));
        assert_close(pts[15], Point::new(7.0, 5.0));
    }

    #[test]
    fn test_points_on_circle_offset() {
        let c = Point::new(0.0, 0.0);
        let pts = points_on_circle(c, 1.0, 12, 30.0);
        // with a 30 degree offset the first point is the one o'clock mark
        assert_close(pts[0], point_on_circle(c, 1.0, 30.0));
        assert_close(pts[11], point_on_circle(c, 1.0, 360.0));
    }

    #[test]
    fn test_all_points_stay_on_radius() {
        let c = Point::new(1.0, -2.0);
        for p in points_on_circle(c, 7.5, 60, 0.0) {
            let d = ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt();
            assert!((d - 7.5).abs() < EPS);
        }
    }
}
