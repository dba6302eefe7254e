//! Fatal startup errors
//!
//! Every failure before the first frame ends the process. Each site has its
//! own exit status so scripts can tell them apart.

use thiserror::Error;

/// Errors that abort startup
#[derive(Error, Debug)]
pub enum StartupError {
    /// The platform event loop could not be created
    #[error("Event loop creation failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be opened
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// No rendering surface for the window
    #[error("Surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter compatible with the surface
    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to create a device
    #[error("Device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// A shader program failed to compile or link
    #[error("Shader program '{program}' failed to build")]
    Shader { program: &'static str },
}

impl StartupError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::EventLoop(_) => 1,
            StartupError::Window(_) => 2,
            StartupError::Surface(_) => 3,
            StartupError::Adapter(_) => 4,
            StartupError::Device(_) => 5,
            StartupError::Shader { .. } => 6,
        }
    }
}
