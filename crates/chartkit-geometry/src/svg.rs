//! SVG serialisation surface.

use std::fmt::Write;

use crate::path::num;
use crate::{ChartSurface, Color, Path, Rect, Style, TextStyle};
use glam::Vec2;

/// A [`ChartSurface`] that accumulates primitives into an SVG document.
///
/// ```
/// use chartkit_geometry::{ChartSurface, Color, Rect, SvgSurface};
///
/// let mut svg = SvgSurface::new(100.0, 50.0);
/// svg.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 0.0);
/// assert!(svg.finish().contains("<rect"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
    elements: usize,
}

impl SvgSurface {
    /// Create an empty document of the given pixel size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            elements: 0,
        }
    }

    /// Paint the whole canvas with a background color.
    pub fn with_background(mut self, color: Color) -> Self {
        let rect = Rect::new(0.0, 0.0, self.width, self.height);
        self.draw_rect(rect, color, 0.0);
        self
    }

    /// Number of elements written so far.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Close the document and return the markup.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            num(self.width),
            num(self.height),
            num(self.width),
            num(self.height),
            self.body
        )
    }
}

fn paint_attr(color: Option<Color>) -> String {
    match color {
        Some(c) => c.to_css(),
        None => "none".to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl ChartSurface for SvgSurface {
    fn draw_path(&mut self, path: &Path, style: &Style) {
        if path.is_empty() || !style.is_visible() {
            return;
        }

        let mut attrs = format!("fill=\"{}\"", paint_attr(style.fill));
        if let Some(stroke) = &style.stroke {
            let _ = write!(
                attrs,
                " stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\"",
                stroke.color.to_css(),
                num(stroke.width),
                stroke.line_cap.as_svg()
            );
            if let Some(dash) = &stroke.dash {
                let pattern: Vec<String> = dash.pattern.iter().map(|v| num(*v)).collect();
                let _ = write!(
                    attrs,
                    " stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"",
                    pattern.join(","),
                    num(dash.offset)
                );
            }
        }

        let _ = writeln!(self.body, "  <path d=\"{}\" {}/>", path.to_svg_data(), attrs);
        self.elements += 1;
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        let _ = write!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            color.to_css()
        );
        if corner_radius > 0.0 {
            let _ = write!(self.body, " rx=\"{}\"", num(corner_radius));
        }
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: &TextStyle) {
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>",
            num(position.x),
            num(position.y),
            num(style.font_size),
            style.color.to_css(),
            style.anchor.as_svg(),
            escape(text)
        );
        self.elements += 1;
    }
}
