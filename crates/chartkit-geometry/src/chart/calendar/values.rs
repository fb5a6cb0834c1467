//! Sparse per-day values of a calendar grid.

use std::sync::Arc;

use chartkit_core::alloc::HashMap;
use chrono::NaiveDate;

use super::CalendarWindow;
use crate::chart::Domain;

/// A count recorded for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionValue {
    pub date: NaiveDate,
    pub count: f64,
}

impl ContributionValue {
    pub fn new(date: NaiveDate, count: f64) -> Self {
        Self { date, count }
    }
}

/// Builds a title for a day's value.
pub type TitleFn = Arc<dyn Fn(&ContributionValue) -> String + Send + Sync>;

/// Builds tooltip attributes (name/value pairs) for a day's value.
pub type TooltipFn = Arc<dyn Fn(&ContributionValue) -> Vec<(String, String)> + Send + Sync>;

/// A value with its derived presentation attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedValue {
    pub value: ContributionValue,
    pub title: Option<String>,
    pub tooltip: Vec<(String, String)>,
}

/// Values keyed by grid slot.
///
/// Rebuilt from scratch on every layout; a later value for the same day
/// replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueCache {
    entries: HashMap<i64, CachedValue>,
    counts: Domain,
}

impl ValueCache {
    /// Index `values` by their slot in `window`.
    ///
    /// Values dated outside the padded grid are dropped.
    pub fn build(
        values: &[ContributionValue],
        window: &CalendarWindow,
        title_for: Option<&TitleFn>,
        tooltip_for: Option<&TooltipFn>,
    ) -> Self {
        let slots = window.slot_count() as i64;
        let mut entries = HashMap::default();
        let mut dropped = 0usize;

        for value in values {
            let index = window.index_for_date(value.date);
            if !(0..slots).contains(&index) {
                dropped += 1;
                continue;
            }

            entries.insert(
                index,
                CachedValue {
                    value: value.clone(),
                    title: title_for.map(|f| f(value)),
                    tooltip: tooltip_for.map(|f| f(value)).unwrap_or_default(),
                },
            );
        }

        if dropped > 0 {
            tracing::trace!(dropped, "values outside the calendar grid ignored");
        }

        let counts = Domain::from_values(entries.values().map(|e| e.value.count));
        Self { entries, counts }
    }

    /// The entry for grid slot `day_index`.
    pub fn get(&self, day_index: i64) -> Option<&CachedValue> {
        self.entries.get(&day_index)
    }

    /// The count for grid slot `day_index`.
    pub fn count(&self, day_index: i64) -> Option<f64> {
        self.get(day_index).map(|e| e.value.count)
    }

    /// Smallest and largest stored counts.
    pub fn counts(&self) -> Domain {
        self.counts
    }

    /// Number of stored days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no day has a value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_values_indexed_from_grid_start() {
        let window = CalendarWindow::new(date(2024, 5, 31), 8).unwrap();
        let values = vec![
            ContributionValue::new(date(2024, 5, 24), 3.0),
            ContributionValue::new(date(2024, 5, 31), 9.0),
        ];
        let cache = ValueCache::build(&values, &window, None, None);

        assert_eq!(cache.count(5), Some(3.0));
        assert_eq!(cache.count(12), Some(9.0));
        assert_eq!(cache.count(6), None);
        assert_eq!(cache.counts(), Domain::new(3.0, 9.0));
    }

    #[test]
    fn test_out_of_grid_values_dropped() {
        let window = CalendarWindow::new(date(2024, 5, 31), 8).unwrap();
        let values = vec![
            ContributionValue::new(date(2023, 1, 1), 100.0),
            ContributionValue::new(date(2024, 5, 20), 2.0),
        ];
        let cache = ValueCache::build(&values, &window, None, None);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.counts(), Domain::new(2.0, 2.0));
    }

    #[test]
    fn test_last_value_wins_and_attributes() {
        let window = CalendarWindow::new(date(2024, 5, 31), 8).unwrap();
        let values = vec![
            ContributionValue::new(date(2024, 5, 30), 1.0),
            ContributionValue::new(date(2024, 5, 30), 4.0),
        ];
        let title: TitleFn = Arc::new(|v| format!("{} on {}", v.count, v.date));
        let tooltip: TooltipFn = Arc::new(|v| vec![("data-count".to_string(), v.count.to_string())]);
        let cache = ValueCache::build(&values, &window, Some(&title), Some(&tooltip));

        let entry = cache.get(11).unwrap();
        assert_eq!(entry.value.count, 4.0);
        assert_eq!(entry.title.as_deref(), Some("4 on 2024-05-30"));
        assert_eq!(entry.tooltip, vec![("data-count".to_string(), "4".to_string())]);
    }
}
