//! Flash Cards - arithmetic flash cards that fill the window
//!
//! The windowing shell lives in the binary; this library holds the parts
//! that do not need a GPU: problem generation, layout, the display cycle,
//! the settings form and UI hit-testing.

pub mod config;
pub mod display;
pub mod layout;
pub mod problem;
pub mod settings;
pub mod surface;
pub mod ui;
