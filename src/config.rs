//! Centralized configuration constants for Flash Cards
//!
//! All magic numbers and tunable parameters should be defined here.

/// Layout constants (in logical pixels, will be scaled by DPI)
pub mod layout {
    /// Height of the button bar at the top of the window
    pub const BUTTON_BAR_HEIGHT: f32 = 44.0;
    /// Height of one row in the settings panel
    pub const SETTINGS_ROW_HEIGHT: f32 = 36.0;
    /// General padding around chrome elements
    pub const PADDING: f32 = 8.0;
    /// Width of a button in the button bar
    pub const BUTTON_WIDTH: f32 = 110.0;
    /// Width of the label column in the settings panel
    pub const LABEL_WIDTH: f32 = 150.0;
    /// Width of an editable settings field
    pub const FIELD_WIDTH: f32 = 140.0;
    /// Corner radius for buttons and fields
    pub const CORNER_RADIUS: f32 = 4.0;
}

/// Rendering constants
pub mod rendering {
    /// Font size the glyph widths are measured at
    pub const REFERENCE_FONT_SIZE: f32 = 32.0;
    /// Glyph width at the reference size when measurement yields nothing usable
    pub const FALLBACK_GLYPH_WIDTH: f32 = 19.2;
    /// Font size for buttons, labels and fields
    pub const UI_FONT_SIZE: f32 = 16.0;
    /// Initial window size
    pub const WINDOW_WIDTH: f64 = 800.0;
    pub const WINDOW_HEIGHT: f64 = 500.0;
}

/// Operand limits
pub mod limits {
    /// Largest accepted operand bound; keeps `max1 * max2` within i64
    pub const MAX_OPERAND: i64 = 1_000_000_000;
    /// Zero draws tolerated for a divisor before falling back to the bound maximum
    pub const MAX_DIVISOR_DRAWS: usize = 64;
}

/// Default settings shown in the form at startup
pub mod defaults {
    pub const OPERAND_MIN: i64 = 0;
    pub const OPERAND_MAX: i64 = 10;
}
