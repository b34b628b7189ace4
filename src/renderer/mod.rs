//! GPU-accelerated rendering with femtovg

mod chrome;
mod fonts;
mod problem_layer;

use femtovg::{Canvas, FontId, renderer::OpenGl};

use flash_cards::settings::SettingsForm;
use flash_cards::ui::{Rect, UiTree};

use crate::error::Result;
use crate::theme::Theme;

use chrome::ChromeRenderer;
pub use problem_layer::CanvasSurface;
use problem_layer::ProblemLayer;

pub struct Renderer {
    canvas: Canvas<OpenGl>,
    fonts: Vec<FontId>,
    theme: Theme,
    width: f32,
    height: f32,
    scale: f32,
    problem_layer: ProblemLayer,
}

impl Renderer {
    pub fn new(renderer: OpenGl, width: f32, height: f32, scale: f32) -> Result<Self> {
        let mut canvas = Canvas::new(renderer)?;
        let fonts = fonts::load_fonts(&mut canvas)?;

        Ok(Self {
            canvas,
            fonts,
            theme: Theme::dark(),
            width,
            height,
            scale,
            problem_layer: ProblemLayer::new(),
        })
    }

    pub fn resize(&mut self, width: f32, height: f32, scale: f32) {
        self.width = width;
        self.height = height;
        self.scale = scale;
    }

    /// The problem area as a drawing surface for the display controller
    pub fn problem_surface(&mut self, area: Rect) -> CanvasSurface<'_> {
        CanvasSurface::new(
            &self.canvas,
            &self.fonts,
            &mut self.problem_layer,
            area.width,
            area.height,
        )
    }

    pub fn render(&mut self, tree: &UiTree, form: &SettingsForm) {
        let (width, height) = (self.width, self.height);

        // Use DPI=1.0; sizes are already in physical pixels
        self.canvas.set_size(width as u32, height as u32, 1.0);
        self.canvas
            .clear_rect(0, 0, width as u32, height as u32, Theme::color(self.theme.bg));

        {
            let mut chrome = ChromeRenderer::new(&mut self.canvas, &self.fonts, &self.theme, self.scale);
            chrome.draw(tree, form);
        }

        self.problem_layer.replay(
            &mut self.canvas,
            &self.fonts,
            tree.problem_area,
            Theme::color(self.theme.fg),
        );

        self.canvas.flush();
    }
}
