//! Error types for the cafe directory

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CafeError>;

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("Cafe not found: {0}")]
    CafeNotFound(i64),

    #[error("Blog not found: {0}")]
    BlogNotFound(i64),

    #[error("Failed to load {location}: {message}")]
    Load { location: String, message: String },

    #[error("Failed to persist {location}: {message}")]
    Persistence { location: String, message: String },

    #[error("No cafe id left after {0}")]
    IdsExhausted(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CafeError {
    /// Whether this error means a lookup by id matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CafeError::CafeNotFound(_) | CafeError::BlogNotFound(_))
    }
}

impl From<serde_json::Error> for CafeError {
    fn from(e: serde_json::Error) -> Self {
        CafeError::Serialization(e.to_string())
    }
}
