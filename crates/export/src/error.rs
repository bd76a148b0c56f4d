use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write export output: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Unknown export format: '{0}' (expected css, scss or json)")]
    UnknownFormat(String),
}
