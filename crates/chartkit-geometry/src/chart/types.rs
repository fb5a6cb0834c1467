//! Chart data types.

use crate::{Color, DashPattern, TextAnchor};
use glam::Vec2;

/// Default dataset color, `rgb(134, 65, 244)`.
pub const DEFAULT_DATASET_COLOR: Color = Color::rgb(134.0 / 255.0, 65.0 / 255.0, 244.0 / 255.0);

/// One series of samples plotted on a shared axis.
///
/// `None` samples are gaps. A dataset's identity is its position in the
/// collection it belongs to; legend entries and colors pair up by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Ordered samples
    pub samples: Vec<Option<f64>>,
    /// Display color
    pub color: Color,
    /// Line stroke width
    pub stroke_width: f32,
    /// Whether dots are drawn on the samples
    pub show_dots: bool,
    /// Optional dash pattern for the line
    pub dash: Option<DashPattern>,
}

impl Dataset {
    /// Create a dataset from samples with default styling.
    pub fn new(samples: Vec<Option<f64>>) -> Self {
        Self {
            samples,
            color: DEFAULT_DATASET_COLOR,
            stroke_width: 3.0,
            show_dots: true,
            dash: None,
        }
    }

    /// Create a dataset with no gaps.
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(Some).collect())
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Enable or disable dots.
    pub fn with_dots(mut self, show: bool) -> Self {
        self.show_dots = show;
        self
    }

    /// Set a dash pattern.
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Number of samples, gaps included.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Non-null samples in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| *s)
    }

    /// First non-null sample.
    pub fn first_value(&self) -> Option<f64> {
        self.values().next()
    }
}

/// Input for line, bezier and area charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineChartData {
    /// X-axis labels, one per sample slot
    pub labels: Vec<String>,
    /// Datasets drawn on a shared y-axis
    pub datasets: Vec<Dataset>,
    /// Legend entries, paired with datasets by index
    pub legend: Vec<String>,
}

impl LineChartData {
    /// Create chart data with x-axis labels and no datasets.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            datasets: Vec::new(),
            legend: Vec::new(),
        }
    }

    /// Add a dataset.
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Set the legend entries.
    pub fn with_legend(mut self, legend: Vec<String>) -> Self {
        self.legend = legend;
        self
    }

    /// Largest sample count across all datasets.
    pub fn x_max(&self) -> usize {
        x_max(&self.datasets)
    }
}

/// A positioned text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Baseline anchor point
    pub position: Vec2,
    pub text: String,
    pub anchor: TextAnchor,
}

impl Label {
    pub fn new(position: Vec2, text: impl Into<String>, anchor: TextAnchor) -> Self {
        Self {
            position,
            text: text.into(),
            anchor,
        }
    }
}

/// Largest sample count across `datasets`.
pub fn x_max(datasets: &[Dataset]) -> usize {
    datasets.iter().map(Dataset::len).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_max_uses_longest_dataset() {
        let data = LineChartData::default()
            .with_dataset(Dataset::from_values(&[1.0, 2.0]))
            .with_dataset(Dataset::new(vec![None, Some(3.0), None, Some(4.0)]));
        assert_eq!(data.x_max(), 4);
        assert_eq!(x_max(&[]), 0);
    }

    #[test]
    fn test_values_skip_gaps() {
        let dataset = Dataset::new(vec![None, Some(3.0), None, Some(4.0)]);
        assert_eq!(dataset.values().collect::<Vec<_>>(), vec![3.0, 4.0]);
        assert_eq!(dataset.first_value(), Some(3.0));
        assert_eq!(dataset.len(), 4);
    }
}
