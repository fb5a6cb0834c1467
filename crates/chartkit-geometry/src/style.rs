//! Fill and stroke styling for drawable primitives.
//!
//! A style combines an optional fill color with an optional stroke.

use crate::Color;

/// Line cap style for stroke endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap ending at the endpoint.
    #[default]
    Butt,
    /// Round cap extending beyond the endpoint.
    Round,
    /// Square cap extending beyond the endpoint.
    Square,
}

impl LineCap {
    /// SVG `stroke-linecap` keyword.
    pub fn as_svg(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Dash pattern for stroked lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    /// Alternating on/off lengths.
    pub pattern: Vec<f32>,
    /// Offset into the pattern to start.
    pub offset: f32,
}

impl DashPattern {
    /// Create a new dash pattern.
    pub fn new(pattern: Vec<f32>, offset: f32) -> Self {
        Self { pattern, offset }
    }

    /// Create a simple dashed line.
    pub fn dashed(dash: f32, gap: f32) -> Self {
        Self {
            pattern: vec![dash, gap],
            offset: 0.0,
        }
    }
}

/// Stroke properties for outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub line_cap: LineCap,
    /// Optional dash pattern
    pub dash: Option<DashPattern>,
}

impl Stroke {
    /// Create a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            line_cap: LineCap::Butt,
            dash: None,
        }
    }

    /// Set the line cap.
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    /// Set the dash pattern.
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Complete style for a drawn path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Optional fill color
    pub fill: Option<Color>,
    /// Optional stroke
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Create a new empty style (invisible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fill-only style.
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a stroke-only style.
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke::solid(color, width)),
        }
    }

    /// Set the fill color.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Check if this style has a visible fill.
    pub fn has_fill(&self) -> bool {
        self.fill.is_some_and(|c| c.a > 0.0)
    }

    /// Check if this style has a visible stroke.
    pub fn has_stroke(&self) -> bool {
        self.stroke
            .as_ref()
            .is_some_and(|s| s.width > 0.0 && s.color.a > 0.0)
    }

    /// Check if this style would render anything.
    pub fn is_visible(&self) -> bool {
        self.has_fill() || self.has_stroke()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_is_invisible() {
        assert!(!Style::new().is_visible());
    }

    #[test]
    fn test_transparent_fill_is_invisible() {
        let style = Style::fill(Color::TRANSPARENT);
        assert!(!style.has_fill());
    }

    #[test]
    fn test_stroke_with_dash() {
        let style = Style::stroke(Color::BLACK, 2.0);
        assert!(style.has_stroke());

        let stroke = Stroke::solid(Color::WHITE, 1.0).with_dash(DashPattern::dashed(5.0, 10.0));
        assert_eq!(stroke.dash.unwrap().pattern, vec![5.0, 10.0]);
    }
}
