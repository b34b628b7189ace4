//! Theme colors for the flash card window

use femtovg::Color;

pub struct Theme {
    /// Background color (RGB 0.0-1.0)
    pub bg: (f32, f32, f32),
    /// Expression text color
    pub fg: (f32, f32, f32),
    /// Button bar and settings panel background
    pub chrome_bg: (f32, f32, f32),
    /// Button background
    pub button_bg: (f32, f32, f32),
    /// Button background while its panel is open
    pub button_active: (f32, f32, f32),
    /// Button label color
    pub button_fg: (f32, f32, f32),
    /// Settings label color
    pub label_fg: (f32, f32, f32),
    /// Field background
    pub field_bg: (f32, f32, f32),
    /// Field border when focused
    pub field_focus: (f32, f32, f32),
    /// Border color for UI elements
    pub border: (f32, f32, f32),
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: (0.0, 0.0, 0.0),
            fg: (1.0, 0.95, 0.85),
            chrome_bg: (0.08, 0.08, 0.1),
            button_bg: (0.18, 0.2, 0.26),
            button_active: (0.25, 0.4, 0.7),
            button_fg: (0.95, 0.95, 0.95),
            label_fg: (0.75, 0.75, 0.8),
            field_bg: (0.14, 0.14, 0.17),
            field_focus: (1.0, 0.6, 0.0),
            border: (0.3, 0.3, 0.35),
        }
    }

    pub fn color(rgb: (f32, f32, f32)) -> Color {
        Color::rgbf(rgb.0, rgb.1, rgb.2)
    }
}
