//! Settings form: operand range fields and the operator selector
//!
//! Fields are edited as free text. Nothing is validated while typing; the
//! form is normalized and written back when the next question is generated.

use crate::problem::{Configuration, OperandBounds, Operator, RangeMode};
use crate::ui::TextInput;

/// Focusable settings rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Min1,
    Max1,
    Min2,
    Max2,
    Operator,
}

const INDEPENDENT_FIELDS: [FieldId; 5] = [
    FieldId::Min1,
    FieldId::Max1,
    FieldId::Min2,
    FieldId::Max2,
    FieldId::Operator,
];

const SHARED_FIELDS: [FieldId; 3] = [FieldId::Min1, FieldId::Max1, FieldId::Operator];

#[derive(Debug, Clone)]
pub struct SettingsForm {
    mode: RangeMode,
    min1: TextInput,
    max1: TextInput,
    min2: TextInput,
    max2: TextInput,
    operator: Operator,
    focus: Option<FieldId>,
    visible: bool,
}

impl SettingsForm {
    /// Build a hidden form pre-filled from `initial`
    pub fn new(mode: RangeMode, initial: &Configuration) -> Self {
        let (b1, b2) = (initial.bounds1(), initial.bounds2());
        Self {
            mode,
            min1: TextInput::new(b1.min().to_string()),
            max1: TextInput::new(b1.max().to_string()),
            min2: TextInput::new(b2.min().to_string()),
            max2: TextInput::new(b2.max().to_string()),
            operator: initial.operator(),
            focus: None,
            visible: false,
        }
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    /// Rows shown in the panel, top to bottom
    pub fn fields(&self) -> &'static [FieldId] {
        match self.mode {
            RangeMode::Independent => &INDEPENDENT_FIELDS,
            RangeMode::Shared => &SHARED_FIELDS,
        }
    }

    pub fn label(&self, field: FieldId) -> &'static str {
        match (self.mode, field) {
            (RangeMode::Shared, FieldId::Min1) => "Minimum",
            (RangeMode::Shared, FieldId::Max1) => "Maximum",
            (_, FieldId::Min1) => "First min",
            (_, FieldId::Max1) => "First max",
            (_, FieldId::Min2) => "Second min",
            (_, FieldId::Max2) => "Second max",
            (_, FieldId::Operator) => "Operator",
        }
    }

    /// Text shown in a row's field
    pub fn value_text(&self, field: FieldId) -> String {
        match self.input(field) {
            Some(input) => input.text().to_string(),
            None => format!("{}  {}", self.operator.symbol(), self.operator.name()),
        }
    }

    pub fn input(&self, field: FieldId) -> Option<&TextInput> {
        match field {
            FieldId::Min1 => Some(&self.min1),
            FieldId::Max1 => Some(&self.max1),
            FieldId::Min2 => Some(&self.min2),
            FieldId::Max2 => Some(&self.max2),
            FieldId::Operator => None,
        }
    }

    fn input_mut(&mut self, field: FieldId) -> Option<&mut TextInput> {
        match field {
            FieldId::Min1 => Some(&mut self.min1),
            FieldId::Max1 => Some(&mut self.max1),
            FieldId::Min2 => Some(&mut self.min2),
            FieldId::Max2 => Some(&mut self.max2),
            FieldId::Operator => None,
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        let field = self.focus?;
        self.input_mut(field)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the panel. Hiding drops focus.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        if !self.visible {
            self.focus = None;
        }
        self.visible
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focused(&self) -> Option<FieldId> {
        self.focus
    }

    pub fn focus(&mut self, field: FieldId) {
        if self.visible && self.fields().contains(&field) {
            self.focus = Some(field);
            if let Some(input) = self.input_mut(field) {
                input.move_to_end();
            }
        }
    }

    pub fn clear_focus(&mut self) -> bool {
        self.focus.take().is_some()
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.step_focus(self.fields().len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        if !self.visible {
            return;
        }
        let fields = self.fields();
        let next = match self.focus.and_then(|f| fields.iter().position(|&x| x == f)) {
            Some(index) => fields[(index + step) % fields.len()],
            None if step == 1 => fields[0],
            None => fields[fields.len() - 1],
        };
        self.focus(next);
    }

    // =========================================================================
    // Editing the focused field
    // =========================================================================

    /// Type into the focused field. Bound fields accept digits and signs;
    /// the operator row accepts operator keys.
    pub fn handle_char(&mut self, ch: char) -> bool {
        match self.focus {
            Some(FieldId::Operator) => match Operator::from_key(ch) {
                Some(op) => {
                    self.operator = op;
                    true
                }
                None => false,
            },
            Some(_) if ch.is_ascii_digit() || ch == '-' || ch == '+' => {
                self.focused_input().map(|input| input.insert_char(ch)).is_some()
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        self.focused_input().map(TextInput::backspace).is_some()
    }

    pub fn delete(&mut self) -> bool {
        self.focused_input().map(TextInput::delete).is_some()
    }

    pub fn move_left(&mut self) -> bool {
        self.focused_input().map(TextInput::move_left).is_some()
    }

    pub fn move_right(&mut self) -> bool {
        self.focused_input().map(TextInput::move_right).is_some()
    }

    pub fn move_to_start(&mut self) -> bool {
        self.focused_input().map(TextInput::move_to_start).is_some()
    }

    pub fn move_to_end(&mut self) -> bool {
        self.focused_input().map(TextInput::move_to_end).is_some()
    }

    /// Up/Down on the operator row cycles the selector
    pub fn cycle_operator(&mut self, forward: bool) -> bool {
        if self.focus != Some(FieldId::Operator) {
            return false;
        }
        self.operator = if forward {
            self.operator.next()
        } else {
            self.operator.previous()
        };
        true
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Normalize the fields, write the corrected values back and return the
    /// resulting configuration
    pub fn apply(&mut self) -> Configuration {
        let bounds1 = OperandBounds::from_fields(self.min1.text(), self.max1.text());
        let bounds2 = match self.mode {
            RangeMode::Independent => OperandBounds::from_fields(self.min2.text(), self.max2.text()),
            RangeMode::Shared => bounds1,
        };

        self.min1.set_text(bounds1.min().to_string());
        self.max1.set_text(bounds1.max().to_string());
        self.min2.set_text(bounds2.min().to_string());
        self.max2.set_text(bounds2.max().to_string());

        let config = Configuration::from_bounds(bounds1, bounds2, self.operator);
        tracing::debug!(?config, "applied settings");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(mode: RangeMode) -> SettingsForm {
        let initial = Configuration::configure(0, 10, 0, 10, Operator::Add);
        SettingsForm::new(mode, &initial)
    }

    fn type_into(form: &mut SettingsForm, field: FieldId, text: &str) {
        form.focus(field);
        while form.input(field).is_some_and(|input| !input.text().is_empty()) {
            form.backspace();
        }
        for ch in text.chars() {
            form.handle_char(ch);
        }
    }

    #[test]
    fn test_apply_writes_back_clamped_values() {
        let mut form = form(RangeMode::Independent);
        form.toggle_visibility();
        type_into(&mut form, FieldId::Min1, "9");
        type_into(&mut form, FieldId::Max1, "3");
        type_into(&mut form, FieldId::Min2, "-5");
        type_into(&mut form, FieldId::Max2, "0");

        let config = form.apply();
        assert_eq!((config.bounds1().min(), config.bounds1().max()), (3, 9));
        assert_eq!((config.bounds2().min(), config.bounds2().max()), (0, 1));
        assert_eq!(form.value_text(FieldId::Min1), "3");
        assert_eq!(form.value_text(FieldId::Max1), "9");
        assert_eq!(form.value_text(FieldId::Min2), "0");
        assert_eq!(form.value_text(FieldId::Max2), "1");
    }

    #[test]
    fn test_apply_twice_is_stable() {
        let mut form = form(RangeMode::Independent);
        form.toggle_visibility();
        type_into(&mut form, FieldId::Max1, "");
        let first = form.apply();
        let second = form.apply();
        assert_eq!(first, second);
        assert_eq!(form.value_text(FieldId::Max1), "1");
    }

    #[test]
    fn test_shared_mode_uses_one_range() {
        let mut form = form(RangeMode::Shared);
        form.toggle_visibility();
        assert_eq!(form.fields(), &[FieldId::Min1, FieldId::Max1, FieldId::Operator]);
        type_into(&mut form, FieldId::Min1, "4");
        type_into(&mut form, FieldId::Max1, "8");
        let config = form.apply();
        assert_eq!(config.bounds1(), config.bounds2());
        assert_eq!(config.bounds2().max(), 8);
    }

    #[test]
    fn test_operator_row() {
        let mut form = form(RangeMode::Independent);
        form.toggle_visibility();
        form.focus(FieldId::Operator);
        assert!(form.handle_char('/'));
        assert_eq!(form.operator(), Operator::Divide);
        assert!(!form.handle_char('7'));
        assert!(form.cycle_operator(true));
        assert_eq!(form.operator(), Operator::Add);
        assert_eq!(form.apply().operator(), Operator::Add);
    }

    #[test]
    fn test_bound_fields_reject_letters() {
        let mut form = form(RangeMode::Independent);
        form.toggle_visibility();
        form.focus(FieldId::Max2);
        assert!(!form.handle_char('q'));
        assert!(form.handle_char('5'));
        assert_eq!(form.value_text(FieldId::Max2), "105");
    }

    #[test]
    fn test_focus_cycle_and_hidden_panel() {
        let mut form = form(RangeMode::Shared);
        form.focus_next();
        assert_eq!(form.focused(), None);

        form.toggle_visibility();
        form.focus_next();
        assert_eq!(form.focused(), Some(FieldId::Min1));
        form.focus_previous();
        assert_eq!(form.focused(), Some(FieldId::Operator));
        form.focus_next();
        assert_eq!(form.focused(), Some(FieldId::Min1));

        form.toggle_visibility();
        assert_eq!(form.focused(), None);
    }
}
