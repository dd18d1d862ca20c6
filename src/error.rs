use thiserror::Error;

#[derive(Debug, Error)]
pub enum BurnError {
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BurnError>;
