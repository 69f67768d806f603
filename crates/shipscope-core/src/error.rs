//! Error types for shipscope

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShipscopeError {
    // Region selection errors
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Field parsing errors (recovered by ingestion, see crate::parse)
    #[error("Malformed coordinate: {text:?}")]
    MalformedCoordinate { text: String },

    #[error("Malformed size: {text:?}")]
    MalformedSize { text: String },

    // Footprint errors
    #[error("Degenerate footprint geometry at latitude {lat}: longitude scale is undefined")]
    DegenerateGeometry { lat: f64 },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ShipscopeError>;
