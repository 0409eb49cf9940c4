use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid segment #{index}: {reason}")]
    InvalidSegment { index: usize, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
