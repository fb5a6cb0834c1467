//! Bezier curve primitives.
//!
//! Quadratic curves back the smoothed line mode; cubic curves back the CSS
//! style timing functions used to ease animated charts.

use glam::Vec2;

/// A quadratic Bezier curve (one control point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Start point
    pub from: Vec2,
    /// Control point
    pub control: Vec2,
    /// End point
    pub to: Vec2,
}

impl QuadraticBezier {
    /// Create a new quadratic Bezier curve.
    pub fn new(from: Vec2, control: Vec2, to: Vec2) -> Self {
        Self { from, control, to }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        self.from * (mt * mt) + self.control * (2.0 * mt * t) + self.to * (t * t)
    }

    /// Get the derivative at parameter t.
    pub fn derivative(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        (self.control - self.from) * (2.0 * mt) + (self.to - self.control) * (2.0 * t)
    }

    /// Approximate the arc length by sampling `subdivisions` chords.
    pub fn arc_length(&self, subdivisions: usize) -> f32 {
        let subdivisions = subdivisions.max(1);
        let mut length = 0.0;
        let mut prev = self.from;

        for i in 1..=subdivisions {
            let point = self.eval(i as f32 / subdivisions as f32);
            length += prev.distance(point);
            prev = point;
        }

        length
    }
}

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: Vec2,
    /// First control point
    pub control1: Vec2,
    /// Second control point
    pub control2: Vec2,
    /// End point
    pub to: Vec2,
}

impl CubicBezier {
    /// Create a new cubic Bezier curve.
    pub fn new(from: Vec2, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// A unit timing curve from (0, 0) to (1, 1), as in CSS `cubic-bezier()`.
    pub fn timing(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(x1, y1), Vec2::new(x2, y2), Vec2::ONE)
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// Find the y value where the curve crosses `x`.
    ///
    /// Only meaningful for curves whose x component is monotonic in t, which
    /// holds for timing curves with control x values inside `[0, 1]`.
    pub fn y_at_x(&self, x: f32) -> f32 {
        let x = x.clamp(self.from.x.min(self.to.x), self.from.x.max(self.to.x));
        let mut lo = 0.0_f32;
        let mut hi = 1.0_f32;

        // 24 halvings resolve t well below f32 pixel precision.
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            if self.eval(mid).x < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        self.eval((lo + hi) * 0.5).y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_endpoints() {
        let curve = QuadraticBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(25.0, 0.0),
            Vec2::new(50.0, 80.0),
        );

        assert_eq!(curve.eval(0.0), curve.from);
        assert_eq!(curve.eval(1.0), curve.to);
    }

    #[test]
    fn test_quadratic_tangent_follows_control() {
        // A control point level with the start makes the curve leave horizontally.
        let curve = QuadraticBezier::new(
            Vec2::new(0.0, 10.0),
            Vec2::new(12.0, 10.0),
            Vec2::new(25.0, 40.0),
        );
        let d = curve.derivative(0.0);
        assert_eq!(d.y, 0.0);
        assert!(d.x > 0.0);
    }

    #[test]
    fn test_straight_quadratic_length() {
        let curve = QuadraticBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
        );
        assert!((curve.arc_length(16) - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_linear_timing_is_identity() {
        let linear = CubicBezier::timing(0.0, 0.0, 1.0, 1.0);
        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!((linear.y_at_x(x) - x).abs() < 1e-3);
        }
    }

    #[test]
    fn test_timing_endpoints() {
        let ease = CubicBezier::timing(0.25, 0.1, 0.25, 1.0);
        assert!(ease.y_at_x(0.0).abs() < 1e-4);
        assert!((ease.y_at_x(1.0) - 1.0).abs() < 1e-4);
    }
}
