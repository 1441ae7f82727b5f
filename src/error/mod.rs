use gtk4::glib::ExitCode;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("gtk runtime exited with {exit_code:?}")]
    GtkRuntime { exit_code: ExitCode },
}
