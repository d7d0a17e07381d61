#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse pitch records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] config::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
