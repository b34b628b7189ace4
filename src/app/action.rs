//! Centralized action system
//!
//! All user-triggerable actions are defined here. Keyboard shortcuts resolve
//! to an `Action` in keybindings.rs; what an action does can depend on
//! whether a settings field is focused, which is decided in `execute`.

use super::App;
use super::state::AppResult;

/// All actions that can be triggered by keyboard shortcuts or UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // =========================================================================
    // Flash cards
    // =========================================================================
    NextCard,
    ToggleSettings,

    // =========================================================================
    // Settings focus
    // =========================================================================
    FocusNextField,
    FocusPreviousField,

    // =========================================================================
    // Field editing
    // =========================================================================
    InsertChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    CycleOperator { forward: bool },

    // =========================================================================
    // Modal
    // =========================================================================
    Cancel, // Escape - leaves the focused field, or quits
    Confirm,
}

impl App {
    /// Execute an action and return whether a redraw is needed
    pub fn execute(&mut self, action: Action) -> AppResult {
        let editing = self.form.focused().is_some();

        match action {
            Action::NextCard | Action::Confirm => self.next_card(),
            Action::ToggleSettings => self.toggle_settings(),

            Action::FocusNextField => {
                self.form.focus_next();
                redraw_if(self.form.focused().is_some())
            }
            Action::FocusPreviousField => {
                self.form.focus_previous();
                redraw_if(self.form.focused().is_some())
            }

            // Space outside a field flips the card
            Action::InsertChar(' ') if !editing => self.next_card(),
            Action::InsertChar(ch) => redraw_if(self.form.handle_char(ch)),
            Action::Backspace => redraw_if(self.form.backspace()),
            Action::Delete => redraw_if(self.form.delete()),
            Action::CursorLeft => redraw_if(self.form.move_left()),
            Action::CursorRight if editing => redraw_if(self.form.move_right()),
            Action::CursorRight => self.next_card(),
            Action::CursorStart => redraw_if(self.form.move_to_start()),
            Action::CursorEnd => redraw_if(self.form.move_to_end()),
            Action::CycleOperator { forward } => redraw_if(self.form.cycle_operator(forward)),

            Action::Cancel => {
                if self.form.clear_focus() {
                    AppResult::Redraw
                } else {
                    AppResult::Exit
                }
            }
        }
    }
}

fn redraw_if(changed: bool) -> AppResult {
    if changed {
        AppResult::Redraw
    } else {
        AppResult::Ok
    }
}
