//! Flash Cards - arithmetic flash cards sized to fill the window
//!
//! Space, Enter or Right shows the next card; F2 or Ctrl+S toggles the
//! settings panel; Escape leaves a field or quits.

mod app;
mod error;
mod renderer;
mod theme;

use std::num::NonZeroU32;

use app::{App, AppResult, Key, KeyEvent, Modifiers, StartupOptions};
use clap::Parser;
use error::{AppError, Result};
use flash_cards::config::{defaults, rendering};
use flash_cards::problem::{Configuration, Operator, RangeMode};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

#[derive(Parser, Debug)]
#[command(name = "flash-cards", about = "Arithmetic flash cards")]
#[command(version)]
struct Cli {
    /// Smallest first operand
    #[arg(long, default_value_t = defaults::OPERAND_MIN, allow_negative_numbers = true)]
    min1: i64,

    /// Largest first operand
    #[arg(long, default_value_t = defaults::OPERAND_MAX, allow_negative_numbers = true)]
    max1: i64,

    /// Smallest second operand
    #[arg(long, default_value_t = defaults::OPERAND_MIN, allow_negative_numbers = true)]
    min2: i64,

    /// Largest second operand
    #[arg(long, default_value_t = defaults::OPERAND_MAX, allow_negative_numbers = true)]
    max2: i64,

    /// Operator: + - x / (or add, sub, mul, div)
    #[arg(long, default_value = "+")]
    operator: Operator,

    /// Use one range (--min/--max) for both operands
    #[arg(long)]
    shared_range: bool,

    /// Smallest operand in shared-range mode
    #[arg(long, default_value_t = defaults::OPERAND_MIN, allow_negative_numbers = true)]
    min: i64,

    /// Largest operand in shared-range mode
    #[arg(long, default_value_t = defaults::OPERAND_MAX, allow_negative_numbers = true)]
    max: i64,

    /// Seed for a reproducible problem sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn startup_options(&self) -> StartupOptions {
        let (mode, config) = if self.shared_range {
            (
                RangeMode::Shared,
                Configuration::configure_shared(self.min, self.max, self.operator),
            )
        } else {
            (
                RangeMode::Independent,
                Configuration::configure(self.min1, self.max1, self.min2, self.max2, self.operator),
            )
        };
        StartupOptions {
            mode,
            config,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = AppHandler::new(cli.startup_options());
    event_loop.run_app(&mut handler)?;

    match handler.startup_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct AppHandler {
    options: StartupOptions,
    state: Option<AppState>,
    startup_error: Option<AppError>,
    modifiers: ModifiersState,
    mouse_position: (f64, f64),
}

struct AppState {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    app: App,
}

impl AppHandler {
    fn new(options: StartupOptions) -> Self {
        Self {
            options,
            state: None,
            startup_error: None,
            modifiers: ModifiersState::default(),
            mouse_position: (0.0, 0.0),
        }
    }
}

impl AppState {
    fn create(event_loop: &ActiveEventLoop, options: StartupOptions) -> Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title("Flash Cards")
            .with_inner_size(LogicalSize::new(rendering::WINDOW_WIDTH, rendering::WINDOW_HEIGHT));

        // 4x MSAA for smooth glyph edges at large sizes
        let config_template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_multisampling(4);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, config_template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("No GL configs found")
            })
            .map_err(|err| AppError::Window(err.to_string()))?;

        let window = window.ok_or_else(|| AppError::Window("window not created".to_string()))?;
        let gl_display = gl_config.display();
        let raw_handle = window.window_handle()?.as_raw();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(None))
            .build(Some(raw_handle));

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attrs)? };

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_handle,
            non_zero(size.width),
            non_zero(size.height),
        );

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs)? };
        let gl_context = gl_context.make_current(&gl_surface)?;

        let renderer = unsafe {
            femtovg::renderer::OpenGl::new_from_function_cstr(|name| {
                gl_display.get_proc_address(name) as *const _
            })?
        };

        let scale = window.scale_factor() as f32;
        let app = App::new(renderer, size.width as f32, size.height as f32, scale, options)?;
        tracing::info!(width = size.width, height = size.height, scale, "window created");

        Ok(Self {
            window,
            gl_context,
            gl_surface,
            app,
        })
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Translate a winit key into the app's key model
fn key_event(key: &WinitKey, modifiers: ModifiersState) -> Option<KeyEvent> {
    let key = match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Named(NamedKey::Enter) => Key::Enter,
        WinitKey::Named(NamedKey::Tab) => Key::Tab,
        WinitKey::Named(NamedKey::Backspace) => Key::Backspace,
        WinitKey::Named(NamedKey::Delete) => Key::Delete,
        WinitKey::Named(NamedKey::ArrowLeft) => Key::ArrowLeft,
        WinitKey::Named(NamedKey::ArrowRight) => Key::ArrowRight,
        WinitKey::Named(NamedKey::ArrowUp) => Key::ArrowUp,
        WinitKey::Named(NamedKey::ArrowDown) => Key::ArrowDown,
        WinitKey::Named(NamedKey::Home) => Key::Home,
        WinitKey::Named(NamedKey::End) => Key::End,
        WinitKey::Named(NamedKey::Space) => Key::Space,
        WinitKey::Named(NamedKey::F2) => Key::F2,
        WinitKey::Character(c) => Key::Char(c.chars().next()?),
        _ => return None,
    };
    let modifiers = Modifiers {
        ctrl: modifiers.control_key(),
        shift: modifiers.shift_key(),
        alt: modifiers.alt_key(),
    };
    Some(KeyEvent::new(key, modifiers))
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match AppState::create(event_loop, self.options) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(err) => {
                tracing::error!(%err, "startup failed");
                self.startup_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        let result = match event {
            WindowEvent::CloseRequested => AppResult::Exit,

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    state
                        .gl_surface
                        .resize(&state.gl_context, non_zero(size.width), non_zero(size.height));
                    let scale = state.window.scale_factor() as f32;
                    state
                        .app
                        .resize(size.width as f32, size.height as f32, scale)
                } else {
                    AppResult::Ok
                }
            }

            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                AppResult::Ok
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match key_event(&event.logical_key, self.modifiers) {
                    Some(key) => state.app.handle_key(&key),
                    None => AppResult::Ok,
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = (position.x, position.y);
                AppResult::Ok
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => state
                .app
                .click_at(self.mouse_position.0 as f32, self.mouse_position.1 as f32),

            WindowEvent::RedrawRequested => {
                state.app.render();
                if let Err(err) = state.gl_surface.swap_buffers(&state.gl_context) {
                    tracing::error!(%err, "failed to swap buffers");
                }
                AppResult::Ok
            }

            _ => AppResult::Ok,
        };

        if result.should_exit() {
            event_loop.exit();
        } else if result.needs_redraw() {
            state.window.request_redraw();
        }
    }
}
