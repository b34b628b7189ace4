//! UI layout and hit-testing

mod button_bar;
mod settings_panel;
mod text_input;
mod tree;
mod types;

// Re-export public types used by other modules
pub use button_bar::ButtonBar;
pub use settings_panel::{SettingsPanel, SettingsRow};
pub use text_input::TextInput;
pub use tree::UiTree;
pub use types::{Rect, UiAction, UiNode};
