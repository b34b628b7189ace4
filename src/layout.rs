//! Auto-fit text layout
//!
//! Glyph advances are measured once at a reference font size and treated as
//! scaling linearly with font size.

use crate::config::rendering::{FALLBACK_GLYPH_WIDTH, REFERENCE_FONT_SIZE};
use crate::problem::{EQUALS, Operator};
use crate::surface::TextSurface;

/// Sizing inputs for the current configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Widest glyph at `REFERENCE_FONT_SIZE`
    pub max_glyph_width: f32,
    /// Upper bound on the expression length in characters
    pub expression_chars: usize,
}

/// Every character an expression can contain
pub fn expression_glyphs() -> impl Iterator<Item = char> {
    ('0'..='9')
        .chain(Operator::ALL.into_iter().map(Operator::symbol))
        .chain(std::iter::once(EQUALS))
}

/// Widest advance among digits, operators and the equals sign at the
/// reference font size
pub fn measure_max_glyph_width(surface: &mut dyn TextSurface) -> f32 {
    let widest = expression_glyphs()
        .map(|ch| surface.measure_glyph_width(ch, REFERENCE_FONT_SIZE))
        .filter(|w| w.is_finite())
        .fold(0.0_f32, f32::max);

    if widest > 0.0 {
        widest
    } else {
        tracing::warn!("glyph measurement returned nothing usable, using fallback width");
        FALLBACK_GLYPH_WIDTH
    }
}

impl LayoutMetrics {
    pub fn new(max_glyph_width: f32, expression_chars: usize) -> Self {
        Self {
            max_glyph_width,
            expression_chars,
        }
    }

    /// Largest whole-pixel font size at which `expression_chars` glyphs fit
    /// across `width`, capped at `height`
    pub fn fit_font_size(&self, width: f32, height: f32) -> f32 {
        let text_width = self.expression_chars.max(1) as f32 * self.max_glyph_width;
        let desired = (REFERENCE_FONT_SIZE / text_width * width).floor();
        desired.min(height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn test_glyph_set() {
        let glyphs: String = expression_glyphs().collect();
        assert_eq!(glyphs, "0123456789+-\u{00d7}\u{00f7}=");
    }

    #[test]
    fn test_measure_uses_reference_size() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 20.0);
        assert_eq!(measure_max_glyph_width(&mut surface), 20.0);
    }

    #[test]
    fn test_measure_falls_back_when_empty() {
        let mut surface = RecordingSurface::new(100.0, 100.0, 0.0);
        assert_eq!(measure_max_glyph_width(&mut surface), FALLBACK_GLYPH_WIDTH);
    }

    #[test]
    fn test_fit_limited_by_width() {
        // 32 / (8 * 16) * 800 = 200
        let metrics = LayoutMetrics::new(16.0, 8);
        assert_eq!(metrics.fit_font_size(800.0, 600.0), 200.0);
    }

    #[test]
    fn test_fit_floors() {
        // 32 / (7 * 16) * 800 = 228.57..
        let metrics = LayoutMetrics::new(16.0, 7);
        assert_eq!(metrics.fit_font_size(800.0, 600.0), 228.0);
    }

    #[test]
    fn test_fit_limited_by_height() {
        let metrics = LayoutMetrics::new(16.0, 5);
        assert_eq!(metrics.fit_font_size(2000.0, 150.0), 150.0);
    }

    #[test]
    fn test_fit_never_negative() {
        let metrics = LayoutMetrics::new(16.0, 5);
        assert_eq!(metrics.fit_font_size(800.0, -40.0), 0.0);
    }

    #[test]
    fn test_fitted_text_does_not_overflow() {
        let glyph = 19.0;
        let metrics = LayoutMetrics::new(glyph, 11);
        for width in [120.0, 333.0, 800.0, 1917.0] {
            let size = metrics.fit_font_size(width, 10_000.0);
            let rendered = 11.0 * glyph * size / REFERENCE_FONT_SIZE;
            assert!(rendered <= width, "{rendered} > {width}");
        }
    }
}
