use duct_paths::InputError;
use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read '{path}': {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid grid: {0}")]
    Input(#[from] InputError),
}
