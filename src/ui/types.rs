//! Core UI types and enums

use crate::settings::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiNode {
    None,
    NextButton,
    SettingsButton,
    ButtonBar,
    Field(FieldId),
    SettingsPanel,
    ProblemArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Next,
    ToggleSettings,
    FocusField(FieldId),
    ClearFocus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
