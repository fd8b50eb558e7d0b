use thiserror::Error;

mod app_error;
mod db_error;

pub use app_error::AppError;
pub use db_error::DbError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True when the error means "the requested record does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::App(AppError::GameNotFound(_))
                | ApplicationError::Db(DbError::ArmyNotFound(_))
                | ApplicationError::Db(DbError::FactionNotFound(_))
        )
    }

    /// True when the error was caused by malformed client input.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            ApplicationError::App(
                AppError::InvalidFileType(_)
                    | AppError::InvalidJson(_)
                    | AppError::MissingFactionFields
                    | AppError::InvalidFactionData(_)
            )
        )
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}
