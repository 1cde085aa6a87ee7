use thiserror::Error;

/// Source error types
///
/// The first three variants form the closed set of "source unavailable"
/// categories a connection-diagnosis UI can map to a concrete config field.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    #[error("Request rejected: {0}")]
    RequestRejected(String),

    #[error("Measure decode failed, offending keys: {}", .offending_keys.join(", "))]
    Decode { offending_keys: Vec<String> },
}

pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    pub fn decode(offending_keys: Vec<String>) -> Self {
        SourceError::Decode { offending_keys }
    }
}
