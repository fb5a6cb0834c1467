//! Calendar (contribution graph) grid layout.
//!
//! Weeks are columns of seven Sunday-first days. In the horizontal
//! orientation weeks advance along x and days along y; the vertical
//! orientation is the transpose. A month break widens the gap at every month
//! transition: days of a week that belong to the later month shift by one
//! break and every following week carries it.

use std::fmt;
use std::sync::Arc;

use chartkit_core::profiling::profile_scope;
use chrono::{Datelike, NaiveDate};
use glam::Vec2;

use super::{CalendarWindow, ContributionValue, DAYS_IN_WEEK, TitleFn, TooltipFn, ValueCache};
use crate::chart::{Label, intensity};
use crate::{GeometryError, GeometryResult, TextAnchor};

/// Default cell edge length.
pub const SQUARE_SIZE: f32 = 20.0;
/// Gap between month labels and the grid.
pub const MONTH_LABEL_GUTTER: f32 = 8.0;
/// Left padding before the grid.
pub const PADDING_LEFT: f32 = 32.0;
/// X of the day labels in the horizontal orientation.
pub const LABEL_PADDING_LEFT: f32 = 10.0;

/// English month abbreviations, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English day abbreviations, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Produces label text from a zero-based month or day index.
pub type LabelFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Calendar grid configuration.
#[derive(Clone)]
pub struct CalendarConfig {
    pub square_size: f32,
    pub gutter_size: f32,
    pub month_break_offset: f32,
    pub horizontal: bool,
    /// Shift of the first week along the week axis
    pub horizontal_offset: f32,
    pub padding_left: f32,
    /// Lower bound of the content width
    pub min_width: f32,
    pub show_month_labels: bool,
    pub show_day_labels: bool,
    pub show_out_of_range_days: bool,
    pub month_label: Option<LabelFn>,
    pub day_label: Option<LabelFn>,
    pub title_for_value: Option<TitleFn>,
    pub tooltip_for_value: Option<TooltipFn>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            square_size: SQUARE_SIZE,
            gutter_size: 1.0,
            month_break_offset: 4.0,
            horizontal: true,
            horizontal_offset: 0.0,
            padding_left: PADDING_LEFT,
            min_width: 0.0,
            show_month_labels: true,
            show_day_labels: false,
            show_out_of_range_days: false,
            month_label: None,
            day_label: None,
            title_for_value: None,
            tooltip_for_value: None,
        }
    }
}

impl fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("square_size", &self.square_size)
            .field("gutter_size", &self.gutter_size)
            .field("month_break_offset", &self.month_break_offset)
            .field("horizontal", &self.horizontal)
            .field("horizontal_offset", &self.horizontal_offset)
            .field("padding_left", &self.padding_left)
            .field("min_width", &self.min_width)
            .field("show_month_labels", &self.show_month_labels)
            .field("show_day_labels", &self.show_day_labels)
            .field("show_out_of_range_days", &self.show_out_of_range_days)
            .field("month_label", &self.month_label.is_some())
            .field("day_label", &self.day_label.is_some())
            .finish_non_exhaustive()
    }
}

impl CalendarConfig {
    /// Set the cell size.
    pub fn with_square_size(mut self, size: f32) -> Self {
        self.square_size = size;
        self
    }

    /// Set the gap between cells.
    pub fn with_gutter_size(mut self, gutter: f32) -> Self {
        self.gutter_size = gutter;
        self
    }

    /// Set the month break width.
    pub fn with_month_break_offset(mut self, offset: f32) -> Self {
        self.month_break_offset = offset;
        self
    }

    /// Lay weeks out along y instead of x.
    pub fn vertical(mut self) -> Self {
        self.horizontal = false;
        self
    }

    /// Show or hide the day labels.
    pub fn with_day_labels(mut self, show: bool) -> Self {
        self.show_day_labels = show;
        self
    }

    /// Show or hide the month labels.
    pub fn with_month_labels(mut self, show: bool) -> Self {
        self.show_month_labels = show;
        self
    }

    /// Show or hide the padding days outside the window.
    pub fn with_out_of_range_days(mut self, show: bool) -> Self {
        self.show_out_of_range_days = show;
        self
    }

    /// Custom month label text.
    pub fn with_month_label(mut self, f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.month_label = Some(Arc::new(f));
        self
    }

    /// Custom day label text.
    pub fn with_day_label(mut self, f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.day_label = Some(Arc::new(f));
        self
    }

    /// Title attached to every day that has a value.
    pub fn with_title_for_value(
        mut self,
        f: impl Fn(&ContributionValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.title_for_value = Some(Arc::new(f));
        self
    }

    /// Tooltip attributes attached to every day that has a value.
    pub fn with_tooltip_for_value(
        mut self,
        f: impl Fn(&ContributionValue) -> Vec<(String, String)> + Send + Sync + 'static,
    ) -> Self {
        self.tooltip_for_value = Some(Arc::new(f));
        self
    }

    /// Check that the sizes describe a drawable grid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] for a non-positive cell size
    /// or a negative gutter, break or offset.
    pub fn validate(&self) -> GeometryResult<()> {
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(GeometryError::InvalidDimension {
                name: "square_size",
                value: self.square_size,
            });
        }
        for (name, value) in [
            ("gutter_size", self.gutter_size),
            ("month_break_offset", self.month_break_offset),
            ("padding_left", self.padding_left),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GeometryError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Distance between neighbouring cells.
    pub fn stride(&self) -> f32 {
        self.square_size + self.gutter_size
    }

    /// Space reserved for month labels.
    pub fn month_label_size(&self) -> f32 {
        if !self.show_month_labels {
            return 0.0;
        }
        if self.horizontal {
            self.square_size + MONTH_LABEL_GUTTER
        } else {
            2.0 * (self.square_size + MONTH_LABEL_GUTTER)
        }
    }

    /// Extent of one week across the day axis.
    pub fn week_width(&self) -> f32 {
        DAYS_IN_WEEK as f32 * self.stride()
    }

    fn month_text(&self, month: usize) -> String {
        match &self.month_label {
            Some(f) => f(month),
            None => MONTH_LABELS[month % 12].to_string(),
        }
    }

    fn day_text(&self, day: usize) -> String {
        match &self.day_label {
            Some(f) => f(day),
            None => DAY_LABELS[day % DAYS_IN_WEEK].to_string(),
        }
    }
}

/// One day slot of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    /// Slot index from the grid start
    pub day_index: usize,
    pub date: NaiveDate,
    pub week: usize,
    /// 0 = Sunday
    pub weekday: usize,
    /// Whether the date lies inside the requested window
    pub in_range: bool,
    /// Top-left corner
    pub position: Vec2,
    pub size: f32,
    pub count: Option<f64>,
    /// Shade intensity in `[0.15, 1.0]`
    pub intensity: f32,
    pub title: Option<String>,
}

impl CalendarCell {
    /// Whether `point` falls on the cell.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + self.size
            && point.y >= self.position.y
            && point.y < self.position.y + self.size
    }
}

/// Complete calendar grid geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarLayout {
    pub window: CalendarWindow,
    pub horizontal: bool,
    /// Every slot, week-major
    pub cells: Vec<CalendarCell>,
    /// Accumulated month-break offset of each week
    pub week_offsets: Vec<f32>,
    pub month_labels: Vec<Label>,
    pub day_labels: Vec<Label>,
    /// Content width and height
    pub size: Vec2,
    pub values: ValueCache,
    show_out_of_range_days: bool,
}

impl CalendarLayout {
    /// Lay out `num_days` days ending on `end_date`.
    ///
    /// # Errors
    ///
    /// Fails when the config does not validate or the window is empty.
    pub fn compute(
        end_date: NaiveDate,
        num_days: u32,
        values: &[ContributionValue],
        config: &CalendarConfig,
    ) -> GeometryResult<Self> {
        config.validate()?;
        let window = CalendarWindow::new(end_date, num_days)?;
        Ok(Self::compute_window(window, values, config))
    }

    /// Lay out an already validated window.
    pub fn compute_window(
        window: CalendarWindow,
        values: &[ContributionValue],
        config: &CalendarConfig,
    ) -> Self {
        profile_scope!("calendar_layout");

        let cache = ValueCache::build(
            values,
            &window,
            config.title_for_value.as_ref(),
            config.tooltip_for_value.as_ref(),
        );
        let counts = cache.counts();
        let stride = config.stride();
        let break_offset = config.month_break_offset;
        let week_count = window.week_count();

        let origin = if config.horizontal {
            Vec2::new(config.padding_left, config.month_label_size())
        } else {
            let day_band = if config.show_day_labels {
                config.square_size + MONTH_LABEL_GUTTER
            } else {
                0.0
            };
            Vec2::new(config.padding_left, day_band)
        };
        let place = |major: f32, minor: f32| -> Vec2 {
            if config.horizontal {
                origin + Vec2::new(major, minor)
            } else {
                origin + Vec2::new(minor, major)
            }
        };

        let mut cells = Vec::with_capacity(window.slot_count());
        let mut week_offsets = Vec::with_capacity(week_count);
        let mut month_labels = Vec::new();
        let mut accumulated = 0.0_f32;
        let mut labelled_month: Option<u32> = None;

        for week in 0..week_count {
            let week_start = window.date_for_index(week * DAYS_IN_WEEK);
            let week_end = window.date_for_index(week * DAYS_IN_WEEK + DAYS_IN_WEEK - 1);

            // A week that opens a month gets its break before it, the first
            // week included.
            if week_start.day() == 1 {
                accumulated += break_offset;
            }
            week_offsets.push(accumulated);

            let week_major = config.horizontal_offset + week as f32 * stride + accumulated;

            for weekday in 0..DAYS_IN_WEEK {
                let day_index = week * DAYS_IN_WEEK + weekday;
                let date = window.date_for_index(day_index);
                let cell_offset = if date.month() != week_start.month() {
                    break_offset
                } else {
                    0.0
                };
                let entry = cache.get(day_index as i64);
                let count = entry.map(|e| e.value.count);

                cells.push(CalendarCell {
                    day_index,
                    date,
                    week,
                    weekday,
                    in_range: window.is_in_range(day_index),
                    position: place(week_major + cell_offset, weekday as f32 * stride),
                    size: config.square_size,
                    count,
                    intensity: intensity(count, counts),
                    title: entry.and_then(|e| e.title.clone()),
                });
            }

            if config.show_month_labels && labelled_month != Some(week_end.month()) {
                labelled_month = Some(week_end.month());
                let text = config.month_text(week_end.month0() as usize);
                let position = if config.horizontal {
                    Vec2::new(
                        config.padding_left + week_major,
                        origin.y - MONTH_LABEL_GUTTER,
                    )
                } else {
                    Vec2::new(
                        config.padding_left + config.week_width() + MONTH_LABEL_GUTTER,
                        origin.y + week_major + config.square_size,
                    )
                };
                month_labels.push(Label::new(position, text, TextAnchor::Start));
            }

            // A week split across months carries the break to every later week.
            if week_start.month() != week_end.month() {
                accumulated += break_offset;
            }
        }

        let day_labels = if config.show_day_labels {
            (0..DAYS_IN_WEEK)
                .map(|day| {
                    let minor = day as f32 * stride;
                    let position = if config.horizontal {
                        Vec2::new(LABEL_PADDING_LEFT, origin.y + minor + config.square_size - 4.0)
                    } else {
                        Vec2::new(origin.x + minor, origin.y - MONTH_LABEL_GUTTER)
                    };
                    Label::new(position, config.day_text(day), TextAnchor::Start)
                })
                .collect()
        } else {
            Vec::new()
        };

        let weeks_extent = config.horizontal_offset + week_count as f32 * stride + accumulated;
        let size = if config.horizontal {
            Vec2::new(
                (weeks_extent + config.padding_left * 2.0).max(config.min_width),
                origin.y + config.week_width() - config.gutter_size,
            )
        } else {
            Vec2::new(
                (config.padding_left + config.week_width() + config.month_label_size())
                    .max(config.min_width),
                origin.y + weeks_extent,
            )
        };

        tracing::debug!(
            weeks = week_count,
            cells = cells.len(),
            values = cache.len(),
            total_break = accumulated,
            "calendar layout"
        );

        Self {
            window,
            horizontal: config.horizontal,
            cells,
            week_offsets,
            month_labels,
            day_labels,
            size,
            values: cache,
            show_out_of_range_days: config.show_out_of_range_days,
        }
    }

    /// Number of week columns.
    pub fn week_count(&self) -> usize {
        self.window.week_count()
    }

    /// The cells that get drawn: in-range days, plus padding days when the
    /// config asked for them.
    pub fn visible_cells(&self) -> impl Iterator<Item = &CalendarCell> + '_ {
        self.cells
            .iter()
            .filter(|c| c.in_range || self.show_out_of_range_days)
    }

    /// The cell of slot `day_index`.
    pub fn cell(&self, day_index: usize) -> Option<&CalendarCell> {
        self.cells.get(day_index)
    }

    /// The visible cell under `point`.
    pub fn cell_at(&self, point: Vec2) -> Option<&CalendarCell> {
        self.visible_cells().find(|c| c.contains(point))
    }

    /// Resolve a press on slot `day_index` to the stored value, or a zero
    /// count for that day when nothing was recorded.
    pub fn day_press(&self, day_index: usize) -> Option<ContributionValue> {
        let cell = self.cell(day_index)?;
        Some(match self.values.get(day_index as i64) {
            Some(entry) => entry.value.clone(),
            None => ContributionValue::new(cell.date, 0.0),
        })
    }
}
