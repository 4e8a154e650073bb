use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed image: {0}")]
    MalformedImage(String),

    #[error("Corrupt region: {0}")]
    CorruptRegion(String),

    #[error("No such file or directory: {0}")]
    LookupMiss(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type InspectResult<T> = Result<T, InspectError>;

impl InspectError {
    /// Errors that leave the session usable: the failed command had no effect.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InspectError::LookupMiss(_) | InspectError::CorruptRegion(_))
    }
}
