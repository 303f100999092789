use thiserror::Error;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid stored value for {key}: {value}")]
    InvalidStoredValue { key: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, TileError>;
