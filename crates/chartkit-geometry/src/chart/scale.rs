//! Linear value-to-pixel scaling.

use super::Dataset;

/// Lowest intensity a calendar cell is drawn with (empty or zero days).
pub const MIN_INTENSITY: f32 = 0.15;

/// Added on top of [`MIN_INTENSITY`] so that any non-zero day is visibly
/// darker than an empty one.
pub const INTENSITY_BOOST: f32 = 0.05;

/// Highest intensity a calendar cell is drawn with.
pub const MAX_INTENSITY: f32 = 1.0;

/// Map `value` linearly from `[domain_min, domain_max]` onto
/// `[range_min, range_max]`.
///
/// Values outside the domain extrapolate. A degenerate domain maps every value
/// to `range_min`.
///
/// ```
/// use chartkit_geometry::chart::map_value;
///
/// assert_eq!(map_value(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// assert_eq!(map_value(3.0, 5.0, 5.0, 0.0, 1.0), 0.0);
/// ```
pub fn map_value(value: f64, domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> f64 {
    let span = domain_max - domain_min;
    if span == 0.0 || !span.is_finite() {
        return range_min;
    }
    range_min + (value - domain_min) / span * (range_max - range_min)
}

/// The numeric extent of the samples drawn on a shared axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

impl Domain {
    /// Create a domain, swapping the bounds if they are reversed.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Extent of a sequence of values. Non-finite values are ignored; an
    /// empty sequence gives `0..0`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut bounds: Option<(f64, f64)> = None;
        for value in values.into_iter().filter(|v| v.is_finite()) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        match bounds {
            Some((min, max)) => Self { min, max },
            None => Self::default(),
        }
    }

    /// Extent over every non-null sample of every dataset.
    pub fn from_datasets(datasets: &[Dataset]) -> Self {
        Self::from_values(datasets.iter().flat_map(|d| d.values()))
    }

    /// Widen the domain so it contains zero.
    pub fn including_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
        }
    }

    /// Whether `min == max`.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a value in this domain onto a pixel range.
    pub fn map(&self, value: f64, range_min: f64, range_max: f64) -> f64 {
        map_value(value, self.min, self.max, range_min, range_max)
    }
}

/// Shade intensity of a count relative to the counts of the whole window.
///
/// Absent and zero counts get [`MIN_INTENSITY`]. Any other count lands in
/// `[MIN_INTENSITY + INTENSITY_BOOST, MAX_INTENSITY]`. When every count is the
/// same the lower domain bound is taken as zero.
pub fn intensity(count: Option<f64>, counts: Domain) -> f32 {
    let count = match count {
        Some(c) if c != 0.0 && c.is_finite() => c,
        _ => return MIN_INTENSITY,
    };

    let lower = if counts.is_degenerate() { 0.0 } else { counts.min };
    let floor = f64::from(MIN_INTENSITY + INTENSITY_BOOST);
    let mapped = map_value(count, lower, counts.max, floor, f64::from(MAX_INTENSITY));
    (mapped as f32).clamp(MIN_INTENSITY + INTENSITY_BOOST, MAX_INTENSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_value_endpoints() {
        assert_eq!(map_value(2.0, 2.0, 8.0, 0.0, 1.0), 0.0);
        assert_eq!(map_value(8.0, 2.0, 8.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_map_value_degenerate_domain() {
        assert_eq!(map_value(5.0, 5.0, 5.0, 0.0, 1.0), 0.0);
        assert_eq!(map_value(100.0, 5.0, 5.0, 42.0, 7.0), 42.0);
    }

    #[test]
    fn test_map_value_monotonic_within_range() {
        let (lo, hi) = (-3.0, 17.0);
        let mut prev = f64::NEG_INFINITY;
        for step in 0..=40 {
            let v = lo + (hi - lo) * f64::from(step) / 40.0;
            let mapped = map_value(v, lo, hi, 10.0, 250.0);
            assert!((10.0..=250.0).contains(&mapped));
            assert!(mapped >= prev);
            prev = mapped;
        }
    }

    #[test]
    fn test_map_value_inverted_range() {
        // Pixel y grows downward, so larger values map to smaller y.
        let low = map_value(0.0, 0.0, 10.0, 181.0, 16.0);
        let high = map_value(10.0, 0.0, 10.0, 181.0, 16.0);
        assert_eq!(low, 181.0);
        assert_eq!(high, 16.0);
    }

    #[test]
    fn test_map_value_extrapolates() {
        assert_eq!(map_value(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn test_domain_from_values() {
        let domain = Domain::from_values([3.0, -2.0, f64::NAN, 9.5]);
        assert_eq!(domain, Domain::new(-2.0, 9.5));
        assert_eq!(Domain::from_values(std::iter::empty()), Domain::default());
    }

    #[test]
    fn test_domain_including_zero() {
        let domain = Domain::new(5.0, 9.0).including_zero();
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 9.0);
    }

    #[test]
    fn test_intensity_bounds() {
        let counts = Domain::new(1.0, 10.0);
        assert_eq!(intensity(None, counts), MIN_INTENSITY);
        assert_eq!(intensity(Some(0.0), counts), MIN_INTENSITY);
        assert_eq!(intensity(Some(10.0), counts), 1.0);
        assert!((intensity(Some(1.0), counts) - 0.2).abs() < 1e-6);
        assert_eq!(intensity(Some(500.0), counts), 1.0);
    }

    #[test]
    fn test_intensity_degenerate_counts() {
        let counts = Domain::new(4.0, 4.0);
        assert_eq!(intensity(Some(4.0), counts), 1.0);
    }
}
