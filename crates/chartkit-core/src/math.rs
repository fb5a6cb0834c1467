//! Math types used by the geometry engine.
//!
//! Pixel-space points are `glam` vectors (`f32`). Data values stay `f64`
//! until they are mapped into pixel space.
//!
//! ```
//! use chartkit_core::math::Vec2;
//!
//! let origin = Vec2::new(64.0, 16.0);
//! let step = Vec2::new(50.0, 0.0);
//! assert_eq!(origin + step * 2.0, Vec2::new(164.0, 16.0));
//! ```

pub use glam::{Vec2, vec2};

/// Convert a data-space coordinate pair to a pixel-space point.
#[inline]
pub fn to_pixel(x: f64, y: f64) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

/// Approximate equality for pixel values.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_narrows() {
        let p = to_pixel(12.5, -3.25);
        assert_eq!(p, Vec2::new(12.5, -3.25));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3, 1e-6));
        assert!(!approx_eq(1.0, 1.1, 1e-3));
    }
}
