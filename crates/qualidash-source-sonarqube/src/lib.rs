//! SonarQube quality-analysis source
//!
//! Fetches the seven release measures for a component and diagnoses
//! connection problems against a SonarQube server.

mod client;
mod decoder;
mod source;
mod types;

pub use source::SonarqubeSource;
