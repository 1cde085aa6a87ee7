use qualidash_source_api::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// A configured source failed during an aggregation run. The source
    /// error keeps its original category; only the source name is added.
    #[error("{source} source failed: {error}")]
    Source {
        source: &'static str,
        #[source]
        error: SourceError,
    },

    #[error("Snapshot store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn source(source: &'static str, error: SourceError) -> Self {
        CoreError::Source { source, error }
    }
}
