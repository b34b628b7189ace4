//! Button bar and settings panel rendering

use femtovg::{Canvas, FontId, Paint, Path, renderer::OpenGl};

use flash_cards::config::{layout, rendering};
use flash_cards::settings::{FieldId, SettingsForm};
use flash_cards::ui::{Rect, SettingsPanel, UiTree};

use crate::theme::Theme;

/// Snap a coordinate to the pixel grid to prevent blurry text rendering.
#[inline]
fn snap_to_pixel(coord: f32) -> f32 {
    coord.round()
}

pub struct ChromeRenderer<'a> {
    canvas: &'a mut Canvas<OpenGl>,
    fonts: &'a [FontId],
    theme: &'a Theme,
    scale: f32,
}

impl<'a> ChromeRenderer<'a> {
    pub fn new(
        canvas: &'a mut Canvas<OpenGl>,
        fonts: &'a [FontId],
        theme: &'a Theme,
        scale: f32,
    ) -> Self {
        Self {
            canvas,
            fonts,
            theme,
            scale,
        }
    }

    pub fn draw(&mut self, tree: &UiTree, form: &SettingsForm) {
        let bar = &tree.button_bar;
        self.fill_rect(bar.rect, Theme::color(self.theme.chrome_bg));
        self.draw_button(bar.next_rect, "Next", false);
        self.draw_button(bar.settings_rect, "Settings", form.is_visible());

        if let Some(panel) = &tree.settings_panel {
            self.draw_panel(panel, form);
        }
    }

    fn draw_button(&mut self, rect: Rect, label: &str, active: bool) {
        let bg = if active {
            self.theme.button_active
        } else {
            self.theme.button_bg
        };
        let mut path = Path::new();
        path.rounded_rect(rect.x, rect.y, rect.width, rect.height, layout::CORNER_RADIUS * self.scale);
        self.canvas.fill_path(&path, &Paint::color(Theme::color(bg)));

        let paint = self.text_paint(self.theme.button_fg);
        let text_width = self.text_width(label, &paint);
        let text_x = snap_to_pixel(rect.x + (rect.width - text_width) / 2.0);
        let text_y = snap_to_pixel(rect.y + rect.height / 2.0 + 5.0 * self.scale);
        let _ = self.canvas.fill_text(text_x, text_y, label, &paint);
    }

    fn draw_panel(&mut self, panel: &SettingsPanel, form: &SettingsForm) {
        self.fill_rect(panel.rect, Theme::color(self.theme.chrome_bg));

        let mut separator = Path::new();
        separator.move_to(panel.rect.x, panel.rect.bottom());
        separator.line_to(panel.rect.x + panel.rect.width, panel.rect.bottom());
        let mut separator_paint = Paint::color(Theme::color(self.theme.border));
        separator_paint.set_line_width(1.0 * self.scale);
        self.canvas.stroke_path(&separator, &separator_paint);

        for row in &panel.rows {
            let label_paint = self.text_paint(self.theme.label_fg);
            let baseline = snap_to_pixel(row.label_rect.y + row.label_rect.height / 2.0 + 5.0 * self.scale);
            let _ = self
                .canvas
                .fill_text(row.label_rect.x, baseline, form.label(row.field), &label_paint);

            self.draw_field(row.field_rect, row.field, form, baseline);
        }
    }

    fn draw_field(&mut self, rect: Rect, field: FieldId, form: &SettingsForm, baseline: f32) {
        let focused = form.focused() == Some(field);
        let mut path = Path::new();
        path.rounded_rect(rect.x, rect.y, rect.width, rect.height, layout::CORNER_RADIUS * self.scale);
        self.canvas
            .fill_path(&path, &Paint::color(Theme::color(self.theme.field_bg)));

        let border = if focused {
            self.theme.field_focus
        } else {
            self.theme.border
        };
        let mut border_paint = Paint::color(Theme::color(border));
        border_paint.set_line_width((if focused { 2.0 } else { 1.0 }) * self.scale);
        self.canvas.stroke_path(&path, &border_paint);

        let text_x = rect.x + layout::PADDING * self.scale;
        let value = form.value_text(field);
        let paint = self.text_paint(self.theme.fg);
        let _ = self.canvas.fill_text(text_x, baseline, &value, &paint);

        // Caret for the focused bound field
        if let (true, Some(input)) = (focused, form.input(field)) {
            let before: String = input.text().chars().take(input.cursor_chars()).collect();
            let cursor_x = snap_to_pixel(text_x + self.text_width(&before, &paint));
            let mut caret = Path::new();
            caret.move_to(cursor_x, baseline - 14.0 * self.scale);
            caret.line_to(cursor_x, baseline + 4.0 * self.scale);
            let mut caret_paint = Paint::color(Theme::color(self.theme.field_focus));
            caret_paint.set_line_width(2.0 * self.scale);
            self.canvas.stroke_path(&caret, &caret_paint);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: femtovg::Color) {
        let mut path = Path::new();
        path.rect(rect.x, rect.y, rect.width, rect.height);
        self.canvas.fill_path(&path, &Paint::color(color));
    }

    fn text_paint(&self, rgb: (f32, f32, f32)) -> Paint {
        let mut paint = Paint::color(Theme::color(rgb));
        paint.set_font(self.fonts);
        paint.set_font_size(rendering::UI_FONT_SIZE * self.scale);
        paint
    }

    fn text_width(&self, text: &str, paint: &Paint) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.canvas.measure_text(0.0, 0.0, text, paint) {
            Ok(metrics) => metrics.width(),
            Err(_) => text.chars().count() as f32 * rendering::UI_FONT_SIZE * 0.6 * self.scale,
        }
    }
}
