pub mod http;
pub mod memory;

pub use http::HttpSettings;
pub use memory::{
    InMemoryProductDirectory,
    InMemorySnapshotStore,
};
