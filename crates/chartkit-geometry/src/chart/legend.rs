//! Legend layout and toggle state.

use crate::{Color, Rect, TextAnchor};
use glam::Vec2;

use super::Label;

/// Legend swatch edge length.
pub const SWATCH_SIZE: f32 = 16.0;
/// Gap between the swatch column and the text.
pub const TEXT_PADDING_LEFT: f32 = 4.0;
/// Estimated advance of a regular character.
pub const CHARACTER_WIDTH: f32 = 6.0;
/// Estimated advance of a narrow character.
pub const NARROW_CHARACTER_WIDTH: f32 = 4.0;

const NARROW_CHARACTERS: &[char] = &[
    '1', 'j', 'i', 'I', 'l', '!', ':', '.', ',', ' ', '(', ')', '[', ']', '{', '}',
];

/// Estimate the rendered width of `text` without a font.
///
/// ```
/// use chartkit_geometry::chart::estimate_text_width;
///
/// assert_eq!(estimate_text_width("Hi!"), 6.0 + 4.0 + 4.0);
/// ```
pub fn estimate_text_width(text: &str) -> f32 {
    text.chars()
        .map(|c| {
            if NARROW_CHARACTERS.contains(&c) {
                NARROW_CHARACTER_WIDTH
            } else {
                CHARACTER_WIDTH
            }
        })
        .sum()
}

/// Legend placement configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    /// X of the text column; swatches sit just left of it
    pub base_x: f32,
    pub font_size: f32,
    /// Opacity of disabled entries
    pub disabled_opacity: f32,
    /// Opacity of swatch colors
    pub swatch_opacity: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            base_x: 80.0,
            font_size: 12.0,
            disabled_opacity: 0.3,
            swatch_opacity: 0.9,
        }
    }
}

impl LegendConfig {
    /// Set the text column x.
    pub fn with_base_x(mut self, base_x: f32) -> Self {
        self.base_x = base_x;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Height of the band reserved above a chart of `chart_height` for
    /// `entries` legend entries.
    pub fn band_height(&self, chart_height: f32, entries: usize) -> f32 {
        if entries == 0 {
            return 0.0;
        }
        chart_height * 0.15 + entries as f32 * self.font_size / 2.0
    }
}

/// One laid-out legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub index: usize,
    pub label: Label,
    pub swatch: Rect,
    /// Touch target covering swatch and text
    pub hit_rect: Rect,
    pub color: Color,
    pub enabled: bool,
}

/// Legend entries stacked vertically from the top of the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendLayout {
    pub entries: Vec<LegendEntry>,
}

impl LegendLayout {
    /// Lay out `texts` with matching `colors`.
    ///
    /// Missing colors fall back to black; a missing selection means every
    /// entry is enabled.
    pub fn compute(
        texts: &[String],
        colors: &[Color],
        config: &LegendConfig,
        selection: Option<&LegendSelection>,
    ) -> Self {
        let entries = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let text_pos = Vec2::new(
                    config.base_x + TEXT_PADDING_LEFT,
                    20.0 + (config.font_size + 5.0) * i as f32,
                );
                let top = text_pos.y - config.font_size + 2.0;
                let left = config.base_x - SWATCH_SIZE;
                let color = colors.get(i).copied().unwrap_or(Color::BLACK);

                LegendEntry {
                    index: i,
                    label: Label::new(text_pos, text.clone(), TextAnchor::Start),
                    swatch: Rect::new(left, top, SWATCH_SIZE, SWATCH_SIZE),
                    hit_rect: Rect::new(
                        left,
                        top,
                        estimate_text_width(text) * 2.0,
                        SWATCH_SIZE * 1.5,
                    ),
                    color: color.with_opacity(config.swatch_opacity),
                    enabled: selection.is_none_or(|s| s.is_enabled(i)),
                }
            })
            .collect();

        Self { entries }
    }

    /// Index of the entry whose touch target contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.hit_rect.contains(point))
            .map(|e| e.index)
    }
}

/// Which datasets a legend has enabled.
///
/// The set is never left empty: turning off the last enabled entry turns
/// another one back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendSelection {
    enabled: Vec<bool>,
}

impl LegendSelection {
    /// All `len` entries enabled.
    pub fn new(len: usize) -> Self {
        Self {
            enabled: vec![true; len],
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Whether entry `index` is enabled. Out-of-range indices are not.
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    /// Number of enabled entries.
    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|e| **e).count()
    }

    /// Whether enabled entries may currently be switched off.
    pub fn allows_disabling(&self) -> bool {
        self.enabled_count() > 1 || self.len() == 2
    }

    /// Toggle entry `index`. Returns `false` if the toggle was refused.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(current) = self.enabled.get(index).copied() else {
            return false;
        };
        if current && !self.allows_disabling() {
            tracing::trace!(index, "legend toggle refused");
            return false;
        }

        self.enabled[index] = !current;

        if self.enabled_count() == 0 {
            if let Some(other) = (0..self.len()).find(|i| *i != index) {
                self.enabled[other] = true;
            }
        }
        true
    }

    /// The enabled items of `items`, in order.
    pub fn filter<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_enabled(*i))
            .map(|(_, item)| item.clone())
            .collect()
    }
}
