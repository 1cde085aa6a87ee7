pub mod collect_release_data;
pub mod test_source_connection;

pub use collect_release_data::CollectReleaseData;
pub use test_source_connection::{
    SourceKind,
    TestSourceConnection,
};
