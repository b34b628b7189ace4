//! Application state types

use flash_cards::problem::{Configuration, RangeMode};

/// Result type for application actions that may trigger UI updates
#[must_use = "Handle the AppResult to ensure the UI updates correctly"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    /// No action needed
    Ok,
    /// UI needs to be redrawn
    Redraw,
    /// The user asked to quit
    Exit,
}

impl AppResult {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, AppResult::Redraw)
    }

    pub fn should_exit(&self) -> bool {
        matches!(self, AppResult::Exit)
    }
}

/// Settings chosen on the command line
#[derive(Debug, Clone, Copy)]
pub struct StartupOptions {
    pub mode: RangeMode,
    pub config: Configuration,
    pub seed: Option<u64>,
}
