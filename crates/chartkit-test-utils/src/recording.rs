//! Recording implementation of [`ChartSurface`].

use chartkit_geometry::{ChartSurface, Color, Path, Rect, Style, TextStyle};
use glam::Vec2;
use parking_lot::Mutex;

/// A primitive handed to the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Path { path: Path, style: Style },
    Rect { rect: Rect, color: Color, corner_radius: f32 },
    Text { position: Vec2, text: String, style: TextStyle },
}

/// Surface that records draw calls instead of rasterising them.
///
/// Calls are kept behind a `Mutex` so a shared reference can be inspected
/// from assertions and helper closures alike.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Mutex<Vec<DrawCall>>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    /// Count path draws.
    pub fn count_paths(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DrawCall::Path { .. }))
            .count()
    }

    /// Count rectangle draws.
    pub fn count_rects(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DrawCall::Rect { .. }))
            .count()
    }

    /// Count text draws.
    pub fn count_texts(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
            .count()
    }

    /// All drawn text runs, in order.
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// All drawn rectangles with their colors, in order.
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl ChartSurface for RecordingSurface {
    fn draw_path(&mut self, path: &Path, style: &Style) {
        self.calls.lock().push(DrawCall::Path {
            path: path.clone(),
            style: style.clone(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.calls.lock().push(DrawCall::Rect {
            rect,
            color,
            corner_radius,
        });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: &TextStyle) {
        self.calls.lock().push(DrawCall::Text {
            position,
            text: text.to_string(),
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.draw_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::BLACK, 0.0);
        surface.draw_text(Vec2::ZERO, "hi", &TextStyle::default());

        assert_eq!(surface.call_count(), 2);
        assert_eq!(surface.count_rects(), 1);
        assert_eq!(surface.texts(), vec!["hi".to_string()]);

        surface.clear_calls();
        assert_eq!(surface.call_count(), 0);
    }
}
