use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start the event loop")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create the window")]
    Window(#[from] winit::error::OsError),
    #[error("failed to set up rendering")]
    Render(#[from] vello::Error),
}
