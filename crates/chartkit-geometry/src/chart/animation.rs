//! Progressive animation sampling.
//!
//! The engine does not own a clock. A host samples progress `t` in `[0, 1]`,
//! eases it, and lays the chart out again with scaled data.

use std::time::Duration;

use super::Dataset;
use crate::CubicBezier;

/// Timing curve applied to linear progress.
///
/// The named curves use the CSS `cubic-bezier()` control points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`
    Ease,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    /// Custom control points `(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The timing curve, or `None` for linear.
    pub fn curve(self) -> Option<CubicBezier> {
        let (x1, y1, x2, y2) = match self {
            Easing::Linear => return None,
            Easing::Ease => (0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
        };
        Some(CubicBezier::timing(x1, y1, x2, y2))
    }

    /// Ease linear progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.curve() {
            Some(curve) => curve.y_at_x(t),
            None => t,
        }
    }
}

/// Eased progress of an animation `elapsed` into `duration`.
///
/// A zero duration is already finished.
pub fn progress(elapsed: Duration, duration: Duration, easing: Easing) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    easing.apply(elapsed.as_secs_f32() / duration.as_secs_f32())
}

/// Scale every non-null sample by `t`.
pub fn animate_datasets(datasets: &[Dataset], t: f32) -> Vec<Dataset> {
    let t = f64::from(t);
    datasets
        .iter()
        .map(|dataset| Dataset {
            samples: dataset.samples.iter().map(|s| s.map(|v| v * t)).collect(),
            ..dataset.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animate_scales_values_keeps_gaps() {
        let datasets = vec![Dataset::new(vec![Some(10.0), None, Some(-4.0)])];
        let half = animate_datasets(&datasets, 0.5);
        assert_eq!(half[0].samples, vec![Some(5.0), None, Some(-2.0)]);
        assert_eq!(half[0].color, datasets[0].color);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-3, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-3, "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_in_lags_ease_out() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_progress() {
        let second = Duration::from_secs(1);
        assert_eq!(progress(Duration::ZERO, Duration::ZERO, Easing::Ease), 1.0);
        assert_eq!(progress(Duration::from_millis(250), second, Easing::Linear), 0.25);
        assert_eq!(progress(Duration::from_secs(3), second, Easing::Linear), 1.0);
    }
}
