use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetuError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Invalid step transition: {0}")]
    InvalidTransition(String),

    #[error("History storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SetuError {
    fn from(e: serde_json::Error) -> Self {
        SetuError::SerializationError(e.to_string())
    }
}
