//! Background grid lines and axis labels for cartesian charts.

use crate::{Color, DashPattern, TextAnchor};
use glam::Vec2;

use super::{DEFAULT_DATASET_COLOR, Domain, Label, PixelFrame};

/// Grid configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Forced segment count; otherwise 1 for a flat domain and 4 for any other
    pub segments: Option<usize>,
    pub horizontal_lines: bool,
    pub vertical_lines: bool,
    pub horizontal_labels: bool,
    pub vertical_labels: bool,
    /// Decimal places of y labels
    pub decimal_places: usize,
    pub y_label_prefix: String,
    pub y_label_suffix: String,
    /// Gap between the y labels and the plot
    pub y_labels_offset: f32,
    /// Extra drop of the x labels below the baseline
    pub x_labels_offset: f32,
    pub font_size: f32,
    pub line_color: Color,
    pub line_width: f32,
    pub line_dash: Option<DashPattern>,
    pub label_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            segments: None,
            horizontal_lines: true,
            vertical_lines: true,
            horizontal_labels: true,
            vertical_labels: true,
            decimal_places: 2,
            y_label_prefix: String::new(),
            y_label_suffix: String::new(),
            y_labels_offset: 12.0,
            x_labels_offset: 0.0,
            font_size: 12.0,
            line_color: DEFAULT_DATASET_COLOR.with_opacity(0.2),
            line_width: 1.0,
            line_dash: Some(DashPattern::dashed(5.0, 10.0)),
            label_color: DEFAULT_DATASET_COLOR,
        }
    }
}

impl GridConfig {
    /// Force the number of horizontal segments.
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = Some(segments.max(1));
        self
    }

    /// Set the y label decimal places.
    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Set the y label prefix and suffix.
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.y_label_prefix = prefix.into();
        self.y_label_suffix = suffix.into();
        self
    }

    /// Disable all lines and labels.
    pub fn hidden() -> Self {
        Self {
            horizontal_lines: false,
            vertical_lines: false,
            horizontal_labels: false,
            vertical_labels: false,
            ..Self::default()
        }
    }

    /// Segment count for `domain`.
    pub fn segment_count(&self, domain: &Domain) -> usize {
        match self.segments {
            Some(count) => count.max(1),
            None if domain.is_degenerate() => 1,
            None => 4,
        }
    }

    fn format_y(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.y_label_prefix, self.decimal_places, value, self.y_label_suffix
        )
    }
}

/// A straight grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Laid-out grid lines and axis labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayout {
    pub horizontal_lines: Vec<GridLine>,
    pub vertical_lines: Vec<GridLine>,
    pub y_labels: Vec<Label>,
    pub x_labels: Vec<Label>,
}

impl GridLayout {
    /// Lay out the grid of a chart whose values span `domain`.
    ///
    /// `slots` is the number of sample positions (vertical lines), `labels` the
    /// x-axis label texts and `first_value` the label used when the chart has
    /// a single segment.
    pub fn compute(
        frame: PixelFrame,
        domain: Domain,
        slots: usize,
        labels: &[String],
        first_value: Option<f64>,
        config: &GridConfig,
    ) -> Self {
        let count = config.segment_count(&domain);
        let base = frame.base_height();
        let step = base / count as f64;
        let top = f64::from(frame.padding_top);
        let right = f64::from(frame.padding_right);

        let horizontal_lines = if config.horizontal_lines {
            (0..=count)
                .map(|i| {
                    let y = (step * i as f64 + top) as f32;
                    GridLine {
                        from: Vec2::new(frame.padding_right, y),
                        to: Vec2::new(frame.width, y),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let y_labels = if config.horizontal_labels {
            let scaler = if domain.span() == 0.0 { 1.0 } else { domain.span() };
            // A single segment gets one label, on the baseline.
            let last = if count == 1 { 0 } else { count };
            (0..=last)
                .map(|i| {
                    let value = if count == 1 {
                        first_value.unwrap_or(domain.min)
                    } else {
                        scaler / count as f64 * i as f64 + domain.min
                    };
                    let y = base - step * i as f64 + top;
                    Label::new(
                        Vec2::new(frame.padding_right - config.y_labels_offset, y as f32),
                        config.format_y(value),
                        TextAnchor::End,
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        let vertical_lines = if config.vertical_lines && slots > 0 {
            let stride = frame.plot_width() / slots as f64;
            (0..slots)
                .map(|i| {
                    let x = (stride * i as f64 + right).floor() as f32;
                    GridLine {
                        from: Vec2::new(x, frame.padding_top),
                        to: Vec2::new(x, (base + top) as f32),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let x_labels = if config.vertical_labels && !labels.is_empty() {
            let stride = frame.plot_width() / labels.len() as f64;
            let y = base + top + f64::from(config.font_size) * 2.0 + f64::from(config.x_labels_offset);
            labels
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let x = stride * i as f64 + right;
                    Label::new(Vec2::new(x as f32, y as f32), text.clone(), TextAnchor::Middle)
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            horizontal_lines,
            vertical_lines,
            y_labels,
            x_labels,
        }
    }

    /// Shift every line and label by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        for line in self
            .horizontal_lines
            .iter_mut()
            .chain(self.vertical_lines.iter_mut())
        {
            line.from += offset;
            line.to += offset;
        }
        for label in self.y_labels.iter_mut().chain(self.x_labels.iter_mut()) {
            label.position += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> PixelFrame {
        PixelFrame::new(300.0, 200.0, 16.0, 64.0).unwrap()
    }

    #[test]
    fn test_segment_count() {
        let config = GridConfig::default();
        assert_eq!(config.segment_count(&Domain::new(3.0, 3.0)), 1);
        assert_eq!(config.segment_count(&Domain::new(0.0, 3.0)), 4);
        assert_eq!(config.with_segments(6).segment_count(&Domain::new(3.0, 3.0)), 6);
    }

    #[test]
    fn test_horizontal_lines_and_labels() {
        let grid = GridLayout::compute(
            frame(),
            Domain::new(0.0, 100.0),
            4,
            &[],
            Some(10.0),
            &GridConfig::default().with_affixes("$", "k"),
        );

        assert_eq!(grid.horizontal_lines.len(), 5);
        assert_eq!(grid.horizontal_lines[0].from, Vec2::new(64.0, 16.0));
        assert_eq!(grid.horizontal_lines[4].to, Vec2::new(300.0, 166.0));

        assert_eq!(grid.y_labels.len(), 5);
        assert_eq!(grid.y_labels[0].text, "$0.00k");
        assert_eq!(grid.y_labels[0].position, Vec2::new(52.0, 166.0));
        assert_eq!(grid.y_labels[4].text, "$100.00k");
        assert_eq!(grid.y_labels[4].position.y, 16.0);
        assert_eq!(grid.y_labels[4].anchor, TextAnchor::End);
    }

    #[test]
    fn test_single_segment_uses_first_value() {
        let grid = GridLayout::compute(
            frame(),
            Domain::new(7.0, 7.0),
            2,
            &[],
            Some(7.0),
            &GridConfig::default().with_decimal_places(0),
        );
        assert_eq!(grid.y_labels.len(), 1);
        assert_eq!(grid.y_labels[0].text, "7");
        assert_eq!(grid.y_labels[0].position.y, 166.0);
        assert_eq!(grid.horizontal_lines.len(), 2);
    }

    #[test]
    fn test_vertical_lines_and_labels() {
        let labels: Vec<String> = ["Jan", "Feb", "Mar"].iter().map(|s| s.to_string()).collect();
        let grid = GridLayout::compute(
            frame(),
            Domain::new(0.0, 1.0),
            3,
            &labels,
            None,
            &GridConfig::default(),
        );

        let xs: Vec<f32> = grid.vertical_lines.iter().map(|l| l.from.x).collect();
        assert_eq!(xs, vec![64.0, 142.0, 221.0]);
        assert_eq!(grid.vertical_lines[0].to.y, 166.0);

        assert_eq!(grid.x_labels[1].text, "Feb");
        assert!((grid.x_labels[1].position.x - 142.666_67).abs() < 1e-3);
        assert_eq!(grid.x_labels[1].position.y, 190.0);
    }

    #[test]
    fn test_hidden_grid_is_empty() {
        let grid = GridLayout::compute(
            frame(),
            Domain::new(0.0, 1.0),
            3,
            &[],
            None,
            &GridConfig::hidden(),
        );
        assert_eq!(grid, GridLayout::default());
    }
}
