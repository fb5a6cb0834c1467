//! Chartkit Geometry - Chart layout as plain vector data
//!
//! This crate provides:
//! - Path primitives with SVG path-data serialisation
//! - Quadratic and cubic Bezier curves
//! - Fill/stroke styling and RGBA colors
//! - A rendering adapter trait ([`ChartSurface`]) and an SVG implementation
//! - Chart layout: scales, line/area/bezier curves, grids, legends, pie
//!   sectors and calendar (contribution) grids (optional "chart" feature)
//!
//! Nothing in here talks to a UI toolkit. Layouts are pure functions from
//! datasets and frames to paths, rectangles and positioned text.
//!
//! # Example
//!
//! ```
//! use chartkit_geometry::chart::*;
//! use chartkit_geometry::{Color, SvgSurface};
//!
//! let data = LineChartData::new(vec!["Jan".into(), "Feb".into(), "Mar".into()])
//!     .with_dataset(Dataset::new(vec![Some(20.0), Some(45.0), Some(28.0)]));
//! let frame = PixelFrame::new(300.0, 220.0, 16.0, 64.0).unwrap();
//!
//! let layout = LineChartLayout::compute(&data, frame, &LineChartConfig::default());
//! assert_eq!(layout.datasets[0].points.len(), 3);
//!
//! let mut svg = SvgSurface::new(300.0, 220.0).with_background(Color::WHITE);
//! ChartRenderer::new(&mut svg).draw_line_chart(&data, frame, &LineChartConfig::default());
//! assert!(svg.finish().contains("<path"));
//! ```

// Core primitives
mod color;
mod curve;
mod error;
mod path;
mod rect;

// Styling
mod style;

// Output
mod surface;
mod svg;

// Chart module (optional)
#[cfg(feature = "chart")]
pub mod chart;

// Re-exports
pub use color::*;
pub use curve::*;
pub use error::*;
pub use path::{Path, PathBuilder, PathCommand};
pub use rect::Rect;

pub use style::*;

pub use surface::*;
pub use svg::*;
