//! Jira sprint-tracking source
//!
//! Fetches the active sprints of an agile board and diagnoses connection
//! problems against a Jira server.

mod client;
mod mapper;
mod source;
mod types;

pub use source::JiraSource;
