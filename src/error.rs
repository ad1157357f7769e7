use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Generation service error: {0}")]
    Generation(String),

    #[error("Malformed generation output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("Missing configuration: {0}")]
    Config(String),
}
