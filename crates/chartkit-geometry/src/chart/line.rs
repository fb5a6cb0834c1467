//! Line, bezier and area chart layout.
//!
//! Samples are placed at `x_i = padding_right + i * plot_width / x_max` and
//! mapped vertically from the baseline (`height * 3/4 + padding_top`) to
//! `padding_top`. A null sample re-uses the last valid point of its own
//! dataset, so a gap draws as a flat hold rather than an interpolation.
//! Leading nulls have nothing to hold and are dropped.

use chartkit_core::alloc::HashSet;
use chartkit_core::math::to_pixel;
use chartkit_core::profiling::profile_scope;
use glam::Vec2;

use super::{
    Dataset, Domain, GridConfig, GridLayout, LegendConfig, LegendLayout, LegendSelection,
    LineChartData, PixelFrame, x_max,
};
use crate::{Color, DashPattern, Path, PathBuilder};

/// Default dot radius.
pub const DOT_RADIUS: f32 = 4.0;
/// Smallest touch target radius around a dot.
pub const MIN_TOUCH_RADIUS: f32 = 14.0;

/// Line chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    /// Smooth with quadratic Bezier segments
    pub bezier: bool,
    /// Force the value domain to contain zero
    pub from_zero: bool,
    /// Fill the area under each line
    pub with_shadow: bool,
    /// Draw dots (datasets may still opt out)
    pub with_dots: bool,
    pub dot_radius: f32,
    /// Sample indices that get no dot
    pub hidden_points: HashSet<usize>,
    pub line_opacity: f32,
    pub dot_opacity: f32,
    pub shadow_opacity: f32,
    pub grid: GridConfig,
    pub legend: LegendConfig,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            bezier: false,
            from_zero: false,
            with_shadow: true,
            with_dots: true,
            dot_radius: DOT_RADIUS,
            hidden_points: HashSet::default(),
            line_opacity: 0.2,
            dot_opacity: 0.9,
            shadow_opacity: 0.1,
            grid: GridConfig::default(),
            legend: LegendConfig::default(),
        }
    }
}

impl LineChartConfig {
    /// Bezier-smoothed variant of the default config.
    pub fn bezier() -> Self {
        Self {
            bezier: true,
            ..Self::default()
        }
    }

    /// Enable or disable bezier smoothing.
    pub fn with_bezier(mut self, bezier: bool) -> Self {
        self.bezier = bezier;
        self
    }

    /// Force the domain to include zero.
    pub fn with_from_zero(mut self, from_zero: bool) -> Self {
        self.from_zero = from_zero;
        self
    }

    /// Enable or disable the area fill.
    pub fn with_shadow(mut self, with_shadow: bool) -> Self {
        self.with_shadow = with_shadow;
        self
    }

    /// Enable or disable dots.
    pub fn with_dots(mut self, with_dots: bool) -> Self {
        self.with_dots = with_dots;
        self
    }

    /// Hide the dots at the given sample indices.
    pub fn with_hidden_points(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.hidden_points.extend(indices);
        self
    }

    /// Set the grid configuration.
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the legend configuration.
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    /// The value domain of `datasets` under this config.
    pub fn domain(&self, datasets: &[Dataset]) -> Domain {
        let domain = Domain::from_datasets(datasets);
        if self.from_zero {
            domain.including_zero()
        } else {
            domain
        }
    }
}

/// Place the samples of `dataset` in pixel space.
///
/// Null samples repeat the previous point of the same dataset; leading nulls
/// are skipped. `snap` floors both coordinates to whole pixels.
pub fn sample_points(
    dataset: &Dataset,
    frame: PixelFrame,
    domain: Domain,
    x_max: usize,
    snap: bool,
) -> Vec<Vec2> {
    sample_points_holding(dataset, frame, domain, x_max, snap, None)
}

/// Like [`sample_points`], but a leading null repeats `held` when given.
///
/// Linear charts pass the last point of the previous dataset here, so a
/// dataset that opens with nulls starts where the one before it ended.
pub fn sample_points_holding(
    dataset: &Dataset,
    frame: PixelFrame,
    domain: Domain,
    x_max: usize,
    snap: bool,
    held: Option<Vec2>,
) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(dataset.len());
    let mut last = held;

    for (i, sample) in dataset.samples.iter().enumerate() {
        let point = match sample {
            Some(value) => {
                let x = frame.x_at(i, x_max);
                let y = domain.map(*value, frame.baseline(), frame.top());
                if snap {
                    to_pixel(x.floor(), y.floor())
                } else {
                    to_pixel(x, y)
                }
            }
            None => match last {
                Some(held) => held,
                None => continue,
            },
        };
        last = Some(point);
        points.push(point);
    }

    points
}

/// Straight polyline through `points`. Empty input gives an empty path.
pub fn linear_path(points: &[Vec2]) -> Path {
    let mut builder = PathBuilder::new();
    builder.polyline(points);
    builder.build()
}

/// Quadratic-Bezier smoothed path through `points`.
///
/// Each neighbour pair is joined by two quadratic segments meeting at their
/// midpoint, with control points halfway between each end and the midpoint
/// at that end's height. Empty input gives a lone `MoveTo(0, 0)` and a single
/// point a lone `MoveTo(point)`.
pub fn bezier_path(points: &[Vec2]) -> Path {
    let mut builder = PathBuilder::new();

    let Some(first) = points.first() else {
        builder.move_to(Vec2::ZERO);
        return builder.build();
    };

    builder.move_to(*first);
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let mid = (p0 + p1) * 0.5;
        let c1 = Vec2::new((mid.x + p0.x) * 0.5, p0.y);
        let c2 = Vec2::new((mid.x + p1.x) * 0.5, p1.y);
        builder.quad_to(c1, mid);
        builder.quad_to(c2, p1);
    }

    builder.build()
}

/// Close a line path down to the baseline.
///
/// `last_x` is the x of the dataset's last sample slot.
pub fn area_path(line: &Path, last_x: f32, frame: PixelFrame) -> Path {
    let baseline = frame.baseline() as f32;
    let mut commands = line.commands().to_vec();
    commands.push(crate::PathCommand::LineTo(Vec2::new(last_x, baseline)));
    commands.push(crate::PathCommand::LineTo(Vec2::new(frame.padding_right, baseline)));
    commands.push(crate::PathCommand::Close);
    Path::from_commands(commands)
}

/// Geometry of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetGeometry {
    /// Index into the datasets that were laid out
    pub dataset_index: usize,
    pub points: Vec<Vec2>,
    pub line: Path,
    /// Area under the line, if shadows are enabled and the dataset has samples
    pub area: Option<Path>,
    pub color: Color,
    pub stroke_width: f32,
    pub dash: Option<DashPattern>,
}

/// A dot on a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub dataset_index: usize,
    pub index: usize,
    pub value: f64,
    pub center: Vec2,
    pub radius: f32,
    pub touch_radius: f32,
    pub color: Color,
}

/// A dot that was hit by a press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotHit {
    pub dataset_index: usize,
    pub index: usize,
    pub value: f64,
    pub x: f32,
    pub y: f32,
}

/// Complete line chart geometry in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub frame: PixelFrame,
    pub domain: Domain,
    pub x_max: usize,
    /// Vertical shift applied below the legend band
    pub offset_y: f32,
    pub datasets: Vec<DatasetGeometry>,
    pub dots: Vec<Dot>,
    pub grid: GridLayout,
    pub legend: Option<LegendLayout>,
}

impl LineChartLayout {
    /// Lay out every dataset of `data`.
    pub fn compute(data: &LineChartData, frame: PixelFrame, config: &LineChartConfig) -> Self {
        Self::compute_with_selection(data, frame, config, None)
    }

    /// Lay out the datasets a legend selection has enabled.
    ///
    /// The legend still lists every entry; disabled ones are flagged.
    pub fn compute_with_selection(
        data: &LineChartData,
        frame: PixelFrame,
        config: &LineChartConfig,
        selection: Option<&LegendSelection>,
    ) -> Self {
        profile_scope!("line_chart_layout");

        let datasets = match selection {
            Some(selection) => selection.filter(&data.datasets),
            None => data.datasets.clone(),
        };

        let domain = config.domain(&datasets);
        let x_max = x_max(&datasets);

        let legend = if data.legend.is_empty() {
            None
        } else {
            let colors: Vec<_> = data.datasets.iter().map(|d| d.color).collect();
            Some(LegendLayout::compute(
                &data.legend,
                &colors,
                &config.legend,
                selection,
            ))
        };
        let offset_y = config.legend.band_height(frame.height, data.legend.len());
        let shift = Vec2::new(0.0, offset_y);

        // Linear mode holds the last point across datasets.
        let mut carried: Option<Vec2> = None;
        let geometry = datasets
            .iter()
            .enumerate()
            .map(|(dataset_index, dataset)| {
                let (points, line) = if config.bezier {
                    let points = sample_points(dataset, frame, domain, x_max, true);
                    let line = bezier_path(&points);
                    (points, line)
                } else {
                    let points =
                        sample_points_holding(dataset, frame, domain, x_max, false, carried);
                    carried = points.last().copied().or(carried);
                    let line = linear_path(&points);
                    (points, line)
                };
                let area = (config.with_shadow && !points.is_empty()).then(|| {
                    let last_x = frame.x_at(dataset.len() - 1, x_max) as f32;
                    area_path(&line, last_x, frame).translated(shift)
                });

                DatasetGeometry {
                    dataset_index,
                    points: points.into_iter().map(|p| p + shift).collect(),
                    line: line.translated(shift),
                    area,
                    color: dataset.color,
                    stroke_width: dataset.stroke_width,
                    dash: dataset.dash.clone(),
                }
            })
            .collect();

        let mut dots = Vec::new();
        if config.with_dots {
            let touch_radius = config.dot_radius.max(MIN_TOUCH_RADIUS);
            for (dataset_index, dataset) in datasets.iter().enumerate() {
                if !dataset.show_dots {
                    continue;
                }
                for (index, sample) in dataset.samples.iter().enumerate() {
                    let Some(value) = *sample else { continue };
                    if config.hidden_points.contains(&index) {
                        continue;
                    }
                    let x = frame.x_at(index, x_max);
                    let y = domain.map(value, frame.baseline(), frame.top());
                    dots.push(Dot {
                        dataset_index,
                        index,
                        value,
                        center: to_pixel(x, y) + shift,
                        radius: config.dot_radius,
                        touch_radius,
                        color: dataset.color,
                    });
                }
            }
        }

        let first_value = datasets.first().and_then(Dataset::first_value);
        let mut grid = GridLayout::compute(
            frame,
            domain,
            x_max,
            &data.labels,
            first_value,
            &config.grid,
        );
        grid.translate(shift);

        tracing::debug!(
            datasets = datasets.len(),
            x_max,
            min = domain.min,
            max = domain.max,
            dots = dots.len(),
            "line chart layout"
        );
        if domain.is_degenerate() && x_max > 0 {
            tracing::trace!(value = domain.min, "flat domain, samples placed on the baseline");
        }

        Self {
            frame,
            domain,
            x_max,
            offset_y,
            datasets: geometry,
            dots,
            grid,
            legend,
        }
    }

    /// The dot nearest to `point` within its touch radius.
    pub fn hit_test(&self, point: Vec2) -> Option<DotHit> {
        let mut best: Option<(f32, &Dot)> = None;

        for dot in &self.dots {
            let dist = dot.center.distance(point);
            if dist <= dot.touch_radius && best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, dot));
            }
        }

        best.map(|(_, dot)| DotHit {
            dataset_index: dot.dataset_index,
            index: dot.index,
            value: dot.value,
            x: dot.center.x,
            y: dot.center.y,
        })
    }

    /// Total height including the legend band.
    pub fn total_height(&self) -> f32 {
        self.frame.height + self.offset_y
    }
}
