pub mod config;
pub mod connection;
pub mod error;
pub mod source;
pub mod types;

pub use config::SourceConfig;
pub use connection::ConnectionResult;
pub use error::{
    SourceError,
    SourceResult,
};
pub use source::{
    MeasureSource,
    SprintSource,
};
pub use types::{
    MetricSet,
    Sprint,
};
