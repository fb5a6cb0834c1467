//! The rendering adapter seam.
//!
//! Layouts produce inert geometry. A [`ChartSurface`] is whatever finally puts
//! that geometry somewhere: an SVG document, a test recorder, or a toolkit
//! canvas owned by the caller.

use crate::{Color, Path, Rect, Style};
use glam::Vec2;

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` keyword.
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Style for a positioned text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
        }
    }
}

impl TextStyle {
    /// Create a start-anchored text style.
    pub fn new(font_size: f32, color: Color) -> Self {
        Self {
            font_size,
            color,
            anchor: TextAnchor::Start,
        }
    }

    /// Set the anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// A drawing target for chart primitives.
///
/// The trait is object safe so renderers can take `&mut dyn ChartSurface`.
pub trait ChartSurface {
    /// Draw a path with the given style.
    fn draw_path(&mut self, path: &Path, style: &Style);

    /// Draw a filled rectangle with an optional corner radius.
    fn draw_rect(&mut self, rect: Rect, color: Color, corner_radius: f32);

    /// Draw text with its baseline at `position`.
    fn draw_text(&mut self, position: Vec2, text: &str, style: &TextStyle);
}
