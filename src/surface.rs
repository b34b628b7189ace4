//! Drawing surface capability used by the layout and display logic

/// The minimal set of text primitives the flash card view needs.
///
/// The femtovg canvas implements this in the renderer; tests use a recorder.
pub trait TextSurface {
    /// Current drawable size in pixels (width, height)
    fn size(&self) -> (f32, f32);

    /// Horizontal advance of `ch` at `font_size` pixels
    fn measure_glyph_width(&mut self, ch: char, font_size: f32) -> f32;

    /// Clear the region from the origin to (width, height)
    fn clear(&mut self, width: f32, height: f32);

    /// Draw `text` left-aligned with its top edge at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::TextSurface;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear { width: f32, height: f32 },
        Text { text: String, x: f32, y: f32, font_size: f32 },
    }

    /// Surface double with a fixed advance per character
    pub struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        /// Advance of a glyph at the reference font size of 32px
        pub glyph_width_at_32: f32,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32, glyph_width_at_32: f32) -> Self {
            Self {
                width,
                height,
                glyph_width_at_32,
                calls: Vec::new(),
            }
        }

        pub fn last_text(&self) -> Option<(&str, f32)> {
            self.calls.iter().rev().find_map(|call| match call {
                DrawCall::Text { text, font_size, .. } => Some((text.as_str(), *font_size)),
                DrawCall::Clear { .. } => None,
            })
        }
    }

    impl TextSurface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn measure_glyph_width(&mut self, _ch: char, font_size: f32) -> f32 {
            self.glyph_width_at_32 * font_size / 32.0
        }

        fn clear(&mut self, width: f32, height: f32) {
            self.calls.push(DrawCall::Clear { width, height });
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                x,
                y,
                font_size,
            });
        }
    }
}
