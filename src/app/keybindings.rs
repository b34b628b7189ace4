//! Keyboard shortcut registry
//!
//! Maps keyboard input to Actions. All keybindings are defined in one place.
//! More specific bindings (with more modifiers) are matched first.

use super::action::Action;

/// Modifier key state
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

#[cfg(test)]
impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Represents a key that can be pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Space,
    F2,
}

/// A keyboard input event (key + modifiers)
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Resolve a key event to an action
///
/// Returns None if the key event doesn't map to any action.
pub fn resolve(event: &KeyEvent) -> Option<Action> {
    let KeyEvent { key, modifiers } = event;
    let Modifiers { ctrl, shift, alt } = *modifiers;

    match key {
        Key::Escape => Some(Action::Cancel),
        Key::Enter => Some(Action::Confirm),
        Key::Space if !ctrl && !alt => Some(Action::NextCard),
        Key::F2 => Some(Action::ToggleSettings),

        Key::Tab if shift => Some(Action::FocusPreviousField),
        Key::Tab => Some(Action::FocusNextField),

        Key::Backspace => Some(Action::Backspace),
        Key::Delete => Some(Action::Delete),

        Key::ArrowLeft => Some(Action::CursorLeft),
        Key::ArrowRight => Some(Action::CursorRight),
        Key::ArrowUp => Some(Action::CycleOperator { forward: false }),
        Key::ArrowDown => Some(Action::CycleOperator { forward: true }),
        Key::Home => Some(Action::CursorStart),
        Key::End => Some(Action::CursorEnd),

        Key::Char(c) => resolve_char(*c, ctrl, alt),

        _ => None,
    }
}

/// Resolve character key shortcuts
fn resolve_char(c: char, ctrl: bool, alt: bool) -> Option<Action> {
    match c.to_ascii_lowercase() {
        's' if ctrl => Some(Action::ToggleSettings),
        'n' if ctrl => Some(Action::NextCard),

        // Regular character input (no ctrl/alt modifiers)
        _ if !ctrl && !alt => Some(Action::InsertChar(c)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_next_card() {
        let event = KeyEvent::new(Key::Space, Modifiers::none());
        assert_eq!(resolve(&event), Some(Action::NextCard));
    }

    #[test]
    fn test_ctrl_s_toggles_settings() {
        let event = KeyEvent::new(Key::Char('S'), Modifiers::ctrl());
        assert_eq!(resolve(&event), Some(Action::ToggleSettings));
        let event = KeyEvent::new(Key::F2, Modifiers::none());
        assert_eq!(resolve(&event), Some(Action::ToggleSettings));
    }

    #[test]
    fn test_shift_tab_focus_previous() {
        let event = KeyEvent::new(Key::Tab, Modifiers::shift());
        assert_eq!(resolve(&event), Some(Action::FocusPreviousField));
    }

    #[test]
    fn test_regular_char() {
        let event = KeyEvent::new(Key::Char('7'), Modifiers::none());
        assert_eq!(resolve(&event), Some(Action::InsertChar('7')));
        let event = KeyEvent::new(Key::Char('q'), Modifiers::ctrl());
        assert_eq!(resolve(&event), None);
    }
}
