//! In-memory collaborator implementations
//!
//! Back the ports for tests and embedded use; the production directory and
//! store live with the consuming application.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{
    CoreError,
    CoreResult,
    Product,
    ProductDirectory,
    ReleaseSnapshot,
    SnapshotStore,
};

pub struct InMemoryProductDirectory {
    products: RwLock<HashMap<i64, Product>>,
}

impl InMemoryProductDirectory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    pub fn insert(&self, product: Product) -> CoreResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|e| CoreError::Internal(format!("Lock poisoned: {e}")))?;
        products.insert(product.id, product);
        Ok(())
    }
}

impl Default for InMemoryProductDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductDirectory for InMemoryProductDirectory {
    async fn get_product(&self, product_id: i64) -> CoreResult<Product> {
        let products = self
            .products
            .read()
            .map_err(|e| CoreError::Internal(format!("Lock poisoned: {e}")))?;
        products
            .get(&product_id)
            .cloned()
            .ok_or(CoreError::ProductNotFound(product_id))
    }
}

pub struct InMemorySnapshotStore {
    snapshots: RwLock<Vec<ReleaseSnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
        }
    }

    pub fn snapshots(&self) -> Vec<ReleaseSnapshot> {
        self.snapshots
            .read()
            .map(|snapshots| snapshots.clone())
            .unwrap_or_default()
    }

    pub fn append_count(&self) -> usize {
        self.snapshots
            .read()
            .map(|snapshots| snapshots.len())
            .unwrap_or(0)
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn append(
        &self, product_id: i64, mut snapshot: ReleaseSnapshot,
    ) -> CoreResult<ReleaseSnapshot> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|e| CoreError::Internal(format!("Lock poisoned: {e}")))?;
        snapshot.product_id = product_id;
        snapshot.id = Some(snapshots.len() as i64 + 1);
        snapshots.push(snapshot.clone());
        Ok(snapshot)
    }
}
