//! Chart layout.
//!
//! Every chart kind is a pure layout step followed by an optional draw step:
//! - Line, bezier and area charts ([`LineChartLayout`])
//! - Grid lines and axis labels ([`GridLayout`])
//! - Legends with toggle state ([`LegendLayout`], [`LegendSelection`])
//! - Pie charts ([`PieChartLayout`])
//! - Calendar / contribution grids ([`CalendarLayout`])
//!
//! Layouts hold plain paths, rectangles and labels in surface coordinates.
//! [`ChartRenderer`] replays them onto any [`ChartSurface`](crate::ChartSurface).
//!
//! # Example
//!
//! ```
//! use chartkit_geometry::chart::*;
//! use chrono::NaiveDate;
//!
//! let end = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
//! let values = vec![ContributionValue::new(end, 4.0)];
//! let layout = CalendarLayout::compute(end, 8, &values, &CalendarConfig::default()).unwrap();
//!
//! assert_eq!(layout.week_count(), 2);
//! assert_eq!(layout.day_press(12).unwrap().count, 4.0);
//! ```

// Core modules
mod animation;
mod calendar;
mod frame;
mod grid;
mod legend;
mod line;
mod pie;
mod renderer;
mod scale;
mod types;

// Re-exports
pub use animation::*;
pub use calendar::*;
pub use frame::*;
pub use grid::*;
pub use legend::*;
pub use line::*;
pub use pie::*;
pub use renderer::*;
pub use scale::*;
pub use types::*;
