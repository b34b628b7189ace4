//! Application state and coordination

mod action;
mod keybindings;
mod state;

use flash_cards::display::{DisplayController, ScreenState};
use flash_cards::problem::{Configuration, ProblemGenerator};
use flash_cards::settings::SettingsForm;
use flash_cards::ui::{UiAction, UiTree};

use crate::error::Result;
use crate::renderer::Renderer;

pub use keybindings::{Key, KeyEvent, Modifiers};
pub use state::{AppResult, StartupOptions};

pub struct App {
    renderer: Renderer,
    display: DisplayController,
    form: SettingsForm,
    /// Configuration the current problem was generated from
    config: Configuration,
    width: f32,
    height: f32,
    scale: f32,
}

impl App {
    pub fn new(
        gl_renderer: femtovg::renderer::OpenGl,
        width: f32,
        height: f32,
        scale: f32,
        options: StartupOptions,
    ) -> Result<Self> {
        let mut renderer = Renderer::new(gl_renderer, width, height, scale)?;
        let form = SettingsForm::new(options.mode, &options.config);

        let generator = match options.seed {
            Some(seed) => ProblemGenerator::seeded(seed),
            None => ProblemGenerator::from_entropy(),
        };
        let area = UiTree::new(width, height, scale, &form).problem_area;
        let display = DisplayController::new(generator, &mut renderer.problem_surface(area));

        let mut app = Self {
            renderer,
            display,
            form,
            config: options.config,
            width,
            height,
            scale,
        };
        // Open on a question
        let _ = app.next_card();
        Ok(app)
    }

    // =========================================================================
    // Core lifecycle
    // =========================================================================

    fn ui_tree(&self) -> UiTree {
        UiTree::new(self.width, self.height, self.scale, &self.form)
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) -> AppResult {
        self.width = width;
        self.height = height;
        self.scale = scale;
        self.renderer.resize(width, height, scale);

        let area = self.ui_tree().problem_area;
        self.display.on_resize(&mut self.renderer.problem_surface(area));
        AppResult::Redraw
    }

    pub fn render(&mut self) {
        let tree = self.ui_tree();
        self.renderer.render(&tree, &self.form);
    }

    // =========================================================================
    // Flash cards
    // =========================================================================

    /// Generate a new question, or reveal the answer to the current one.
    /// The settings form is validated only when a new question starts.
    pub fn next_card(&mut self) -> AppResult {
        if self.display.state() == ScreenState::Question {
            self.config = self.form.apply();
        }
        let area = self.ui_tree().problem_area;
        self.display
            .on_generate_trigger(&self.config, &mut self.renderer.problem_surface(area));
        AppResult::Redraw
    }

    pub fn toggle_settings(&mut self) -> AppResult {
        let visible = self.form.toggle_visibility();
        tracing::debug!(visible, "settings panel toggled");

        let area = self.ui_tree().problem_area;
        self.display
            .on_toggle_settings_visibility(&mut self.renderer.problem_surface(area));
        AppResult::Redraw
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn handle_key(&mut self, event: &KeyEvent) -> AppResult {
        match keybindings::resolve(event) {
            Some(action) => self.execute(action),
            None => AppResult::Ok,
        }
    }

    pub fn click_at(&mut self, x: f32, y: f32) -> AppResult {
        match self.ui_tree().click(x, y) {
            UiAction::Next => self.next_card(),
            UiAction::ToggleSettings => self.toggle_settings(),
            UiAction::FocusField(field) => {
                self.form.focus(field);
                AppResult::Redraw
            }
            UiAction::ClearFocus => {
                if self.form.clear_focus() {
                    AppResult::Redraw
                } else {
                    AppResult::Ok
                }
            }
            UiAction::None => AppResult::Ok,
        }
    }
}
