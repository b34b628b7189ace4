//! Settings panel layout and hit-testing

use super::types::{Rect, UiNode};
use crate::config::layout;
use crate::settings::FieldId;

#[derive(Debug, Clone)]
pub struct SettingsRow {
    pub field: FieldId,
    pub label_rect: Rect,
    pub field_rect: Rect,
}

#[derive(Debug, Clone)]
pub struct SettingsPanel {
    pub rect: Rect,
    pub rows: Vec<SettingsRow>,
}

impl SettingsPanel {
    /// Lay out one row per field starting at `top`
    pub fn new(width: f32, top: f32, scale: f32, fields: &[FieldId]) -> Self {
        let row_height = layout::SETTINGS_ROW_HEIGHT * scale;
        let padding = layout::PADDING * scale;
        let label_width = layout::LABEL_WIDTH * scale;
        let field_width = layout::FIELD_WIDTH * scale;

        let rows = fields
            .iter()
            .enumerate()
            .map(|(i, &field)| {
                let y = top + padding + i as f32 * row_height;
                SettingsRow {
                    field,
                    label_rect: Rect::new(padding, y, label_width, row_height - padding),
                    field_rect: Rect::new(
                        padding * 2.0 + label_width,
                        y,
                        field_width,
                        row_height - padding,
                    ),
                }
            })
            .collect();

        Self {
            rect: Rect::new(0.0, top, width, Self::height(fields.len(), scale)),
            rows,
        }
    }

    /// Total panel height for `row_count` rows
    pub fn height(row_count: usize, scale: f32) -> f32 {
        row_count as f32 * layout::SETTINGS_ROW_HEIGHT * scale + layout::PADDING * scale
    }

    pub fn hit_test(&self, x: f32, y: f32) -> UiNode {
        if let Some(row) = self.rows.iter().find(|row| row.field_rect.contains(x, y)) {
            return UiNode::Field(row.field);
        }
        if self.rect.contains(x, y) {
            UiNode::SettingsPanel
        } else {
            UiNode::None
        }
    }
}
