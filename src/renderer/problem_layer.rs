//! Retained problem layer and the femtovg `TextSurface` adapter
//!
//! The display controller draws whenever an event arrives, but femtovg
//! repaints the whole window on every frame. Draw calls are therefore kept
//! in a layer that each frame replays inside the problem area.

use femtovg::{Align, Baseline, Canvas, Color, FontId, Paint, renderer::OpenGl};

use flash_cards::surface::TextSurface;
use flash_cards::ui::Rect;

#[derive(Debug, Clone)]
struct LayerText {
    text: String,
    x: f32,
    y: f32,
    font_size: f32,
}

/// Text currently shown in the problem area
#[derive(Debug, Default)]
pub struct ProblemLayer {
    items: Vec<LayerText>,
}

impl ProblemLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the retained text with `area`'s top-left as the origin
    pub fn replay(&self, canvas: &mut Canvas<OpenGl>, fonts: &[FontId], area: Rect, color: Color) {
        canvas.save();
        canvas.intersect_scissor(area.x, area.y, area.width, area.height);
        for item in &self.items {
            // femtovg rejects empty glyph sizes
            if item.font_size < 1.0 {
                continue;
            }
            let paint = text_paint(fonts, item.font_size, color);
            if let Err(err) = canvas.fill_text(area.x + item.x, area.y + item.y, &item.text, &paint) {
                tracing::warn!(?err, text = %item.text, "failed to draw expression");
            }
        }
        canvas.restore();
    }
}

fn text_paint(fonts: &[FontId], font_size: f32, color: Color) -> Paint {
    let mut paint = Paint::color(color);
    paint.set_font(fonts);
    paint.set_font_size(font_size);
    paint.set_text_align(Align::Left);
    paint.set_text_baseline(Baseline::Top);
    paint
}

/// Problem area of the window as seen by the display controller
pub struct CanvasSurface<'a> {
    canvas: &'a Canvas<OpenGl>,
    fonts: &'a [FontId],
    layer: &'a mut ProblemLayer,
    width: f32,
    height: f32,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(
        canvas: &'a Canvas<OpenGl>,
        fonts: &'a [FontId],
        layer: &'a mut ProblemLayer,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            canvas,
            fonts,
            layer,
            width,
            height,
        }
    }
}

impl TextSurface for CanvasSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn measure_glyph_width(&mut self, ch: char, font_size: f32) -> f32 {
        let paint = text_paint(self.fonts, font_size, Color::white());
        let mut buf = [0u8; 4];
        match self.canvas.measure_text(0.0, 0.0, ch.encode_utf8(&mut buf), &paint) {
            Ok(metrics) => metrics.width(),
            Err(err) => {
                tracing::warn!(?err, %ch, "failed to measure glyph");
                0.0
            }
        }
    }

    fn clear(&mut self, _width: f32, _height: f32) {
        self.layer.items.clear();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32) {
        self.layer.items.push(LayerText {
            text: text.to_string(),
            x,
            y,
            font_size,
        });
    }
}
