pub mod app;
mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod preferences;
pub mod state;
pub mod theme;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting nightswitch");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!("gtk runtime exited");
    Ok(())
}
