use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Line {line}: {message}")]
    Import { line: usize, message: String },

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
