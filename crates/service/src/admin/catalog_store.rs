use async_trait::async_trait;
use models::CatalogRecord;

use crate::catalog::summary::Summary;
use crate::errors::ServiceError;

/// Trait abstraction for one admin-managed record collection.
/// Implementations decide how the collection is held and shared.
#[async_trait]
pub trait CatalogStore<R: CatalogRecord>: Send + Sync {
    async fn list(&self, term: &str) -> Vec<R>;
    async fn get(&self, id: u64) -> Result<R, ServiceError>;
    async fn create(&self, input: R::Input) -> Result<R, ServiceError>;
    /// `Ok(None)` when no record has `id`; nothing is changed.
    async fn update(&self, id: u64, input: R::Input) -> Result<Option<R>, ServiceError>;
    /// Whether a record was removed. Never fails.
    async fn delete(&self, id: u64) -> bool;
    async fn summary(&self) -> Summary;
}
