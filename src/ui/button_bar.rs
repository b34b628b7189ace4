//! Button bar layout and hit-testing

use super::types::{Rect, UiNode};
use crate::config::layout;

#[derive(Debug, Clone)]
pub struct ButtonBar {
    pub rect: Rect,
    pub next_rect: Rect,
    pub settings_rect: Rect,
}

impl ButtonBar {
    pub fn new(width: f32, scale: f32) -> Self {
        let height = layout::BUTTON_BAR_HEIGHT * scale;
        let padding = layout::PADDING * scale;
        let button_width = layout::BUTTON_WIDTH * scale;
        let button_height = height - padding * 2.0;

        let next_rect = Rect::new(padding, padding, button_width, button_height);
        let settings_rect = Rect::new(
            next_rect.x + button_width + padding,
            padding,
            button_width,
            button_height,
        );

        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            next_rect,
            settings_rect,
        }
    }

    pub fn hit_test(&self, x: f32, y: f32) -> UiNode {
        if self.next_rect.contains(x, y) {
            UiNode::NextButton
        } else if self.settings_rect.contains(x, y) {
            UiNode::SettingsButton
        } else if self.rect.contains(x, y) {
            UiNode::ButtonBar
        } else {
            UiNode::None
        }
    }
}
