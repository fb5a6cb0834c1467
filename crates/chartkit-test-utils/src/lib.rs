//! Test utilities for chartkit.
//!
//! This crate provides a [`RecordingSurface`], a [`ChartSurface`] that keeps
//! every primitive it is asked to draw so tests can assert on what a renderer
//! produced without parsing SVG.
//!
//! # Example
//!
//! ```rust
//! use chartkit_geometry::chart::*;
//! use chartkit_test_utils::RecordingSurface;
//!
//! let data = LineChartData::default().with_dataset(Dataset::from_values(&[1.0, 2.0]));
//! let frame = PixelFrame::with_default_padding(300.0, 220.0).unwrap();
//! let config = LineChartConfig::default().with_grid(GridConfig::hidden());
//!
//! let mut surface = RecordingSurface::new();
//! ChartRenderer::new(&mut surface).draw_line_chart(&data, frame, &config);
//!
//! // One area, one line and two dots.
//! assert_eq!(surface.count_paths(), 4);
//! ```
//!
//! [`ChartSurface`]: chartkit_geometry::ChartSurface

mod recording;

pub use recording::*;
