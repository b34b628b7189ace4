//! UI tree coordinator for hit-testing and actions

use super::button_bar::ButtonBar;
use super::settings_panel::SettingsPanel;
use super::types::{Rect, UiAction, UiNode};
use crate::settings::SettingsForm;

#[derive(Debug, Clone)]
pub struct UiTree {
    pub button_bar: ButtonBar,
    pub settings_panel: Option<SettingsPanel>,
    pub problem_area: Rect,
}

impl UiTree {
    pub fn new(width: f32, height: f32, scale: f32, form: &SettingsForm) -> Self {
        let button_bar = ButtonBar::new(width, scale);
        let settings_panel = form
            .is_visible()
            .then(|| SettingsPanel::new(width, button_bar.rect.bottom(), scale, form.fields()));

        let chrome_height = settings_panel
            .as_ref()
            .map(|panel| panel.rect.bottom())
            .unwrap_or(button_bar.rect.bottom());
        let problem_area = Rect::new(0.0, chrome_height, width, (height - chrome_height).max(0.0));

        Self {
            button_bar,
            settings_panel,
            problem_area,
        }
    }

    /// Height of everything above the problem area
    pub fn chrome_height(&self) -> f32 {
        self.problem_area.y
    }

    pub fn hit_test(&self, x: f32, y: f32) -> UiNode {
        if self.button_bar.rect.contains(x, y) {
            return self.button_bar.hit_test(x, y);
        }

        if let Some(panel) = &self.settings_panel {
            if panel.rect.contains(x, y) {
                return panel.hit_test(x, y);
            }
        }

        if self.problem_area.contains(x, y) {
            return UiNode::ProblemArea;
        }

        UiNode::None
    }

    pub fn click(&self, x: f32, y: f32) -> UiAction {
        match self.hit_test(x, y) {
            UiNode::NextButton => UiAction::Next,
            UiNode::SettingsButton => UiAction::ToggleSettings,
            UiNode::Field(field) => UiAction::FocusField(field),
            UiNode::SettingsPanel | UiNode::ButtonBar | UiNode::ProblemArea => UiAction::ClearFocus,
            UiNode::None => UiAction::None,
        }
    }
}
