//! Pie chart layout.

use std::f32::consts::{PI, TAU};

use chartkit_core::profiling::profile_scope;
use glam::Vec2;

use super::Label;
use crate::{Color, GeometryError, GeometryResult, Path, PathBuilder, Rect, TextAnchor};

/// Height of one legend row.
pub const LEGEND_ROW_HEIGHT: f32 = 30.0;
/// Legend swatch edge length.
pub const LEGEND_SWATCH_SIZE: f32 = 16.0;

/// One slice of a pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: Color,
}

impl PieSlice {
    pub fn new(name: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            value,
            color,
        }
    }
}

/// Pie chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartConfig {
    /// Extra shift of the pie to the right
    pub padding_left: f32,
    /// Offset of the pie center from its default position
    pub center: Vec2,
    /// Label slices with their raw values instead of percentages
    pub absolute: bool,
    /// Show "<1%" instead of "0%" for tiny non-empty slices
    pub avoid_false_zero: bool,
    pub has_legend: bool,
    pub legend_font_size: f32,
    pub legend_color: Color,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            padding_left: 0.0,
            center: Vec2::ZERO,
            absolute: false,
            avoid_false_zero: false,
            has_legend: true,
            legend_font_size: 15.0,
            legend_color: Color::from_rgb_u8(127, 127, 127),
        }
    }
}

impl PieChartConfig {
    /// Set the left padding.
    pub fn with_padding_left(mut self, padding: f32) -> Self {
        self.padding_left = padding;
        self
    }

    /// Label with absolute values.
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    /// Show "<1%" for rounded-zero slices.
    pub fn with_avoid_false_zero(mut self, avoid: bool) -> Self {
        self.avoid_false_zero = avoid;
        self
    }

    /// Enable or disable the legend.
    pub fn with_legend(mut self, has_legend: bool) -> Self {
        self.has_legend = has_legend;
        self
    }
}

/// A laid-out sector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub index: usize,
    /// Clockwise from 12 o'clock, radians
    pub start_angle: f32,
    pub end_angle: f32,
    pub path: Path,
    pub color: Color,
    /// Value or percentage text
    pub value_text: String,
}

impl Sector {
    /// Angular size of the sector.
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

/// A legend row next to the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieLegendRow {
    pub index: usize,
    pub swatch: Rect,
    pub color: Color,
    pub label: Label,
}

/// Complete pie chart geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartLayout {
    pub center: Vec2,
    pub radius: f32,
    pub total: f64,
    pub sectors: Vec<Sector>,
    pub legend: Vec<PieLegendRow>,
}

/// Point on a circle at `angle` clockwise from 12 o'clock.
pub fn polar(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + radius * angle.sin(), center.y - radius * angle.cos())
}

/// Path of a solid sector from `start` to `end` (radians, clockwise).
///
/// A full turn is drawn as two half arcs since a single arc with equal end
/// points draws nothing.
pub fn sector_path(center: Vec2, radius: f32, start: f32, end: f32) -> Path {
    let sweep = end - start;
    let mut builder = PathBuilder::new();
    if sweep <= 0.0 || radius <= 0.0 {
        return builder.build();
    }

    let radii = Vec2::splat(radius);
    if sweep >= TAU - 1e-4 {
        builder.move_to(polar(center, radius, start));
        builder.arc_to(radii, 0.0, false, true, polar(center, radius, start + PI));
        builder.arc_to(radii, 0.0, false, true, polar(center, radius, start));
        builder.close();
        return builder.build();
    }

    builder.move_to(polar(center, radius, start));
    builder.arc_to(radii, 0.0, sweep > PI, true, polar(center, radius, end));
    builder.line_to(center);
    builder.close();
    builder.build()
}

/// Text shown for a slice.
pub fn value_text(value: f64, total: f64, config: &PieChartConfig) -> String {
    if config.absolute {
        return format!("{}", value);
    }
    if total == 0.0 {
        return "0%".to_string();
    }

    let percentage = (100.0 / total * value).round();
    if config.avoid_false_zero && percentage == 0.0 {
        "<1%".to_string()
    } else {
        format!("{}%", percentage)
    }
}

impl PieChartLayout {
    /// Lay out a pie in a `width` x `height` area.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] for a non-positive size.
    pub fn compute(
        slices: &[PieSlice],
        width: f32,
        height: f32,
        config: &PieChartConfig,
    ) -> GeometryResult<Self> {
        Self::compute_animated(slices, width, height, config, 1.0)
    }

    /// Lay out a pie that is `progress` (0..=1, already eased) of the way
    /// through its intro animation.
    ///
    /// Growth is modelled as an invisible extra slice worth ten times the
    /// total that shrinks to nothing.
    pub fn compute_animated(
        slices: &[PieSlice],
        width: f32,
        height: f32,
        config: &PieChartConfig,
        progress: f32,
    ) -> GeometryResult<Self> {
        profile_scope!("pie_chart_layout");

        for (name, value) in [("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::InvalidDimension { name, value });
            }
        }

        let total: f64 = slices.iter().map(|s| s.value).sum();
        let phantom = total * 10.0 * f64::from(1.0 - progress.clamp(0.0, 1.0));
        let weight_total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum::<f64>() + phantom;

        let radius = height / 2.5;
        let center = Vec2::new(width / 4.0 + config.padding_left, height / 2.0) + config.center;

        let mut angle = 0.0_f32;
        let sectors = slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let sweep = if weight_total > 0.0 {
                    (slice.value.max(0.0) / weight_total) as f32 * TAU
                } else {
                    0.0
                };
                let start = angle;
                angle += sweep;

                Sector {
                    index,
                    start_angle: start,
                    end_angle: angle,
                    path: sector_path(center, radius, start, angle),
                    color: slice.color,
                    value_text: value_text(slice.value, total, config),
                }
            })
            .collect::<Vec<_>>();

        let legend = if config.has_legend {
            let block_top = (height - slices.len() as f32 * LEGEND_ROW_HEIGHT) * 0.5;
            let left = width * 0.6;
            sectors
                .iter()
                .zip(slices)
                .map(|(sector, slice)| {
                    let top = block_top + sector.index as f32 * LEGEND_ROW_HEIGHT;
                    let swatch_top = top + (LEGEND_ROW_HEIGHT - LEGEND_SWATCH_SIZE) * 0.5;
                    PieLegendRow {
                        index: sector.index,
                        swatch: Rect::new(left, swatch_top, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_SIZE),
                        color: slice.color,
                        label: Label::new(
                            Vec2::new(
                                left + LEGEND_SWATCH_SIZE + 6.0,
                                swatch_top + LEGEND_SWATCH_SIZE - 2.0,
                            ),
                            format!("{} {}", sector.value_text, slice.name),
                            TextAnchor::Start,
                        ),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        tracing::debug!(slices = slices.len(), total, progress, "pie chart layout");

        Ok(Self {
            center,
            radius,
            total,
            sectors,
            legend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathCommand;

    fn slices(values: &[f64]) -> Vec<PieSlice> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| PieSlice::new(format!("s{}", i), *v, Color::BLACK))
            .collect()
    }

    #[test]
    fn test_polar_starts_at_twelve_oclock() {
        let p = polar(Vec2::ZERO, 10.0, 0.0);
        assert!(p.x.abs() < 1e-5 && (p.y + 10.0).abs() < 1e-5);

        let q = polar(Vec2::ZERO, 10.0, PI / 2.0);
        assert!((q.x - 10.0).abs() < 1e-5 && q.y.abs() < 1e-4);
    }

    #[test]
    fn test_sectors_cover_full_turn() {
        let layout =
            PieChartLayout::compute(&slices(&[1.0, 2.0, 1.0]), 400.0, 200.0, &PieChartConfig::default())
                .unwrap();

        assert_eq!(layout.center, Vec2::new(100.0, 100.0));
        assert_eq!(layout.radius, 80.0);
        assert!((layout.sectors[1].sweep() - PI).abs() < 1e-5);
        assert!((layout.sectors[2].end_angle - TAU).abs() < 1e-5);
        assert_eq!(layout.sectors[0].value_text, "25%");
        assert_eq!(layout.sectors[1].value_text, "50%");
    }

    #[test]
    fn test_large_arc_flag() {
        let path = sector_path(Vec2::ZERO, 10.0, 0.0, PI * 1.5);
        match path.commands()[1] {
            PathCommand::ArcTo { large_arc, sweep, .. } => {
                assert!(large_arc);
                assert!(sweep);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_full_circle_uses_two_arcs() {
        let layout =
            PieChartLayout::compute(&slices(&[5.0]), 400.0, 200.0, &PieChartConfig::default()).unwrap();
        let arcs = layout.sectors[0]
            .path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
    }

    #[test]
    fn test_value_text_variants() {
        let config = PieChartConfig::default();
        assert_eq!(value_text(3.0, 0.0, &config), "0%");
        assert_eq!(value_text(1.0, 1000.0, &config), "0%");
        assert_eq!(
            value_text(1.0, 1000.0, &config.clone().with_avoid_false_zero(true)),
            "<1%"
        );
        assert_eq!(value_text(21500.5, 1.0, &config.with_absolute(true)), "21500.5");
    }

    #[test]
    fn test_zero_total_draws_nothing() {
        let layout =
            PieChartLayout::compute(&slices(&[0.0, 0.0]), 400.0, 200.0, &PieChartConfig::default())
                .unwrap();
        assert!(layout.sectors.iter().all(|s| s.path.is_empty()));
        assert_eq!(layout.sectors[0].value_text, "0%");
    }

    #[test]
    fn test_legend_rows_centered() {
        let layout =
            PieChartLayout::compute(&slices(&[1.0, 1.0]), 400.0, 200.0, &PieChartConfig::default())
                .unwrap();
        assert_eq!(layout.legend.len(), 2);
        assert_eq!(layout.legend[0].swatch.x, 240.0);
        assert_eq!(layout.legend[0].swatch.y, 77.0);
        assert_eq!(layout.legend[1].swatch.y, 107.0);
        assert_eq!(layout.legend[1].label.text, "50% s1");
    }

    #[test]
    fn test_animation_grows_sectors() {
        let data = slices(&[1.0, 1.0]);
        let config = PieChartConfig::default();
        let start = PieChartLayout::compute_animated(&data, 400.0, 200.0, &config, 0.0).unwrap();
        let end = PieChartLayout::compute_animated(&data, 400.0, 200.0, &config, 1.0).unwrap();

        assert!(start.sectors[0].sweep() < end.sectors[0].sweep());
        assert!((start.sectors[0].sweep() - TAU / 22.0).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_size() {
        let err = PieChartLayout::compute(&[], 0.0, 10.0, &PieChartConfig::default()).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDimension { name: "width", .. }));
    }
}
