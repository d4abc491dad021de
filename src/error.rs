use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON error in {path}: {message}")]
    JsonError { path: String, message: String },

    #[error("I/O error on {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Daily stat file {0} contains no stat rows")]
    EmptyDailyFile(String),
}

impl AppError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        AppError::IoError {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn json(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        AppError::JsonError {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
