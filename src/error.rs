use thiserror::Error;

/// Failures while bringing up the window, GL context or canvas
#[derive(Error, Debug)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("window handle unavailable: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    #[error("OpenGL error: {0}")]
    Gl(#[from] glutin::error::Error),

    #[error("canvas error: {0:?}")]
    Canvas(femtovg::ErrorKind),

    #[error("no usable font found; install dejavu-fonts or liberation-fonts")]
    NoFont,
}

impl From<femtovg::ErrorKind> for AppError {
    fn from(err: femtovg::ErrorKind) -> Self {
        AppError::Canvas(err)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
