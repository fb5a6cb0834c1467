//! Drawing laid-out charts onto a [`ChartSurface`].

use chartkit_core::profiling::profile_scope;

use super::{
    CalendarLayout, GridConfig, GridLayout, Label, LegendConfig, LegendLayout, LineChartConfig,
    LineChartData, LineChartLayout, PieChartConfig, PieChartLayout, PixelFrame,
};
use crate::{ChartSurface, Color, Path, PathBuilder, Stroke, Style, TextStyle};

/// Corner radius of legend swatches.
const SWATCH_RADIUS: f32 = 8.0;

/// Draws chart layouts onto a surface.
///
/// The renderer holds no state beyond the borrowed surface; layouts are
/// computed up front and can be kept by the caller for hit testing.
pub struct ChartRenderer<'a> {
    surface: &'a mut dyn ChartSurface,
}

impl<'a> ChartRenderer<'a> {
    /// Create a renderer drawing onto `surface`.
    pub fn new(surface: &'a mut dyn ChartSurface) -> Self {
        Self { surface }
    }

    /// Lay out and draw a line chart. Returns the layout for hit testing.
    pub fn draw_line_chart(
        &mut self,
        data: &LineChartData,
        frame: PixelFrame,
        config: &LineChartConfig,
    ) -> LineChartLayout {
        let layout = LineChartLayout::compute(data, frame, config);
        self.draw_line_layout(&layout, config);
        layout
    }

    /// Draw a computed line chart: legend, grid, areas, lines, then dots.
    pub fn draw_line_layout(&mut self, layout: &LineChartLayout, config: &LineChartConfig) {
        profile_scope!("draw_line_chart");

        if let Some(legend) = &layout.legend {
            self.draw_legend(legend, &config.legend);
        }
        self.draw_grid(&layout.grid, &config.grid);

        for dataset in &layout.datasets {
            if let Some(area) = &dataset.area {
                self.surface.draw_path(
                    area,
                    &Style::fill(dataset.color.with_opacity(config.shadow_opacity)),
                );
            }
        }

        for dataset in &layout.datasets {
            let mut stroke = Stroke::solid(
                dataset.color.with_opacity(config.line_opacity),
                dataset.stroke_width,
            );
            if let Some(dash) = &dataset.dash {
                stroke = stroke.with_dash(dash.clone());
            }
            self.surface
                .draw_path(&dataset.line, &Style::new().with_stroke(stroke));
        }

        for dot in &layout.dots {
            let mut builder = PathBuilder::new();
            builder.circle(dot.center, dot.radius);
            self.surface.draw_path(
                &builder.build(),
                &Style::fill(dot.color.with_opacity(config.dot_opacity)),
            );
        }
    }

    /// Draw grid lines and axis labels.
    pub fn draw_grid(&mut self, grid: &GridLayout, config: &GridConfig) {
        profile_scope!("draw_grid");

        let mut stroke = Stroke::solid(config.line_color, config.line_width);
        if let Some(dash) = &config.line_dash {
            stroke = stroke.with_dash(dash.clone());
        }
        let style = Style::new().with_stroke(stroke);

        for line in grid.horizontal_lines.iter().chain(&grid.vertical_lines) {
            let mut builder = PathBuilder::new();
            builder.move_to(line.from).line_to(line.to);
            self.surface.draw_path(&builder.build(), &style);
        }

        let text = TextStyle::new(config.font_size, config.label_color);
        for label in grid.y_labels.iter().chain(&grid.x_labels) {
            self.draw_label(label, &text);
        }
    }

    /// Draw legend swatches and texts. Disabled entries are faded.
    pub fn draw_legend(&mut self, legend: &LegendLayout, config: &LegendConfig) {
        profile_scope!("draw_legend");

        for entry in &legend.entries {
            let fade = if entry.enabled {
                1.0
            } else {
                config.disabled_opacity
            };
            let color = entry.color.with_opacity(entry.color.a * fade);
            self.surface.draw_rect(entry.swatch, color, SWATCH_RADIUS);
            self.draw_label(
                &entry.label,
                &TextStyle::new(config.font_size, Color::BLACK.with_opacity(fade)),
            );
        }
    }

    /// Draw visible calendar cells shaded by intensity, then labels.
    pub fn draw_calendar(&mut self, layout: &CalendarLayout, color: Color, labels: &TextStyle) {
        profile_scope!("draw_calendar");

        for cell in layout.visible_cells() {
            let rect = crate::Rect::new(cell.position.x, cell.position.y, cell.size, cell.size);
            self.surface
                .draw_rect(rect, color.with_opacity(cell.intensity), 0.0);
        }
        for label in layout.month_labels.iter().chain(&layout.day_labels) {
            self.draw_label(label, labels);
        }
    }

    /// Draw pie sectors and the legend rows.
    pub fn draw_pie(&mut self, layout: &PieChartLayout, config: &PieChartConfig) {
        profile_scope!("draw_pie");

        for sector in &layout.sectors {
            self.draw_filled(&sector.path, sector.color);
        }

        let text = TextStyle::new(config.legend_font_size, config.legend_color);
        for row in &layout.legend {
            self.surface.draw_rect(row.swatch, row.color, SWATCH_RADIUS);
            self.draw_label(&row.label, &text);
        }
    }

    fn draw_filled(&mut self, path: &Path, color: Color) {
        if path.draws_anything() {
            self.surface.draw_path(path, &Style::fill(color));
        }
    }

    fn draw_label(&mut self, label: &Label, style: &TextStyle) {
        let style = style.clone().with_anchor(label.anchor);
        self.surface.draw_text(label.position, &label.text, &style);
    }
}
