use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Game '{0}' not found")]
    GameNotFound(String),

    #[error("File must be a JSON file, got '{0}'")]
    InvalidFileType(String),

    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    #[error("JSON must contain 'faction' and 'game' fields")]
    MissingFactionFields,

    #[error("Invalid faction data: {0}")]
    InvalidFactionData(String),
}
