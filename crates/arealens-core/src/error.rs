#[derive(Debug, thiserror::Error)]
pub enum ArealensError {
    #[error("shape detection failed: {0}")]
    ShapeDetection(String),

    #[error("text recognition backend not available: {0}")]
    RecognizerUnavailable(String),

    #[error("text recognition failed: {0}")]
    Recognition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
