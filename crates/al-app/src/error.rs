//! Error types for the al-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives the CLI a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Lab config error: {0}")]
    Lab(String),

    #[error("Failed to read lab file: {path}")]
    LabFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Density error: {0}")]
    Density(String),

    #[error("Table error: {0}")]
    Table(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for al-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<al_lab::LabError> for AppError {
    fn from(err: al_lab::LabError) -> Self {
        AppError::Lab(err.to_string())
    }
}

impl From<al_density::DensityError> for AppError {
    fn from(err: al_density::DensityError) -> Self {
        AppError::Density(err.to_string())
    }
}

impl From<al_table::TableError> for AppError {
    fn from(err: al_table::TableError) -> Self {
        AppError::Table(err.to_string())
    }
}

impl From<al_core::UnitError> for AppError {
    fn from(err: al_core::UnitError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<al_core::AlError> for AppError {
    fn from(err: al_core::AlError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
