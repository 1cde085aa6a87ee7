//! Collaborator ports consumed by the aggregation use cases

use async_trait::async_trait;

use super::error::CoreResult;
use super::product::Product;
use super::release::ReleaseSnapshot;

/// Resolves a product and its configured source credentials.
#[async_trait]
pub trait ProductDirectory: Send + Sync {
    /// Fails with [`crate::CoreError::ProductNotFound`] for an unknown id.
    async fn get_product(&self, product_id: i64) -> CoreResult<Product>;
}

/// Durable, append-only storage of release snapshots keyed by product.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persists the snapshot and returns it with its assigned id.
    /// Durability is guaranteed before returning; prior entries are never
    /// mutated or removed by an append.
    async fn append(&self, product_id: i64, snapshot: ReleaseSnapshot)
        -> CoreResult<ReleaseSnapshot>;
}
