//! Question/answer display cycle
//!
//! The controller owns the generator, the cached problem and the layout
//! metrics. Every handler finishes by re-rendering into the given surface.

use rand::Rng;
use rand::rngs::StdRng;

use crate::layout::{self, LayoutMetrics};
use crate::problem::{Configuration, Problem, ProblemGenerator};
use crate::surface::TextSurface;

/// What the next generation trigger will show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Question,
    Answer,
}

pub struct DisplayController<R = StdRng> {
    generator: ProblemGenerator<R>,
    state: ScreenState,
    problem: Option<Problem>,
    display_text: String,
    metrics: LayoutMetrics,
}

impl<R: Rng> DisplayController<R> {
    /// Measure the glyph set once on `surface` and start in the question state
    pub fn new(generator: ProblemGenerator<R>, surface: &mut dyn TextSurface) -> Self {
        let max_glyph_width = layout::measure_max_glyph_width(surface);
        tracing::debug!(max_glyph_width, "measured expression glyphs");
        Self {
            generator,
            state: ScreenState::Question,
            problem: None,
            display_text: String::new(),
            metrics: LayoutMetrics::new(max_glyph_width, 1),
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Show a new question, or reveal the answer to the current one
    pub fn on_generate_trigger(&mut self, config: &Configuration, surface: &mut dyn TextSurface) {
        match (self.state, self.problem) {
            (ScreenState::Answer, Some(problem)) => {
                self.display_text = problem.answer_text();
                self.state = ScreenState::Question;
            }
            _ => {
                let problem = self.generator.generate(config);
                self.metrics.expression_chars = config.expression_chars();
                self.display_text = problem.question_text();
                self.problem = Some(problem);
                self.state = ScreenState::Answer;
                tracing::debug!(
                    ?problem,
                    expression_chars = self.metrics.expression_chars,
                    "generated problem"
                );
            }
        }
        self.render(surface);
    }

    /// Re-render the cached text after the surface changed size
    pub fn on_resize(&mut self, surface: &mut dyn TextSurface) {
        self.render(surface);
    }

    /// Re-render the cached text after the settings panel was shown or hidden
    pub fn on_toggle_settings_visibility(&mut self, surface: &mut dyn TextSurface) {
        self.render(surface);
    }

    /// Clear the surface and draw the cached text at the fitted size
    pub fn render(&self, surface: &mut dyn TextSurface) {
        let (width, height) = surface.size();
        surface.clear(width, height);
        if self.display_text.is_empty() {
            return;
        }
        let font_size = self.metrics.fit_font_size(width, height);
        tracing::debug!(width, height, font_size, text = %self.display_text, "render");
        surface.draw_text(&self.display_text, 0.0, 0.0, font_size);
    }
}
