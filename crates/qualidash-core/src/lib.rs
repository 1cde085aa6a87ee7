pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod sources;

use std::sync::Arc;

pub use application::{
    CollectReleaseData,
    SourceKind,
    TestSourceConnection,
};
pub use domain::{
    CoreError,
    CoreResult,
    Product,
    ProductDirectory,
    ReleaseSnapshot,
    SnapshotStore,
};
pub use infrastructure::{
    HttpSettings,
    InMemoryProductDirectory,
    InMemorySnapshotStore,
};
pub use qualidash_source_api::{
    ConnectionResult,
    MetricSet,
    SourceConfig,
    SourceError,
    Sprint,
};
use sources::Sources;

/// Wires the aggregation use cases against the two fixed sources.
///
/// The product directory and snapshot store are supplied by the consuming
/// application; the source gateways are built here with the given HTTP
/// settings.
pub struct CoreContext {
    pub collect_release_data: Arc<CollectReleaseData>,

    pub test_source_connection: Arc<TestSourceConnection>,
}

impl CoreContext {
    pub fn new(
        directory: Arc<dyn ProductDirectory>, store: Arc<dyn SnapshotStore>,
        settings: HttpSettings,
    ) -> CoreResult<Self> {
        let sources = Sources::new(&settings)?;

        let collect_release_data = Arc::new(CollectReleaseData::new(
            Arc::clone(&directory),
            store,
            Arc::clone(&sources.sonarqube),
            Arc::clone(&sources.jira),
        ));
        let test_source_connection = Arc::new(TestSourceConnection::new(
            directory,
            sources.sonarqube,
            sources.jira,
        ));

        Ok(Self {
            collect_release_data,
            test_source_connection,
        })
    }
}
