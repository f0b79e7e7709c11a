//! Error types for the rl-app service layer.

use std::path::PathBuf;

/// Application error type wrapping errors from the backend crates behind
/// one interface for the front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rl-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<rl_config::ValidationError> for AppError {
    fn from(err: rl_config::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<rl_sim::SimError> for AppError {
    fn from(err: rl_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<rl_report::ReportError> for AppError {
    fn from(err: rl_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
