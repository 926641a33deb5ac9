use std::sync::Arc;

use async_trait::async_trait;
use models::CatalogRecord;
use tokio::sync::RwLock;

use crate::admin::catalog_store::CatalogStore;
use crate::catalog::manager::ListManager;
use crate::catalog::summary::Summary;
use crate::errors::ServiceError;
use crate::notify::Notifier;

/// A [`ListManager`] shared between request handlers.
///
/// Each operation holds the lock for its whole duration, so concurrent
/// requests observe the same run-to-completion ordering as a single caller.
#[derive(Clone)]
pub struct SharedCatalog<R: CatalogRecord> {
    inner: Arc<RwLock<ListManager<R>>>,
}

impl<R: CatalogRecord> SharedCatalog<R> {
    pub fn new(records: Vec<R>, notifier: Arc<dyn Notifier>) -> Arc<Self> {
        Arc::new(Self::from_manager(ListManager::new(records, notifier)))
    }

    pub fn from_manager(manager: ListManager<R>) -> Self {
        Self { inner: Arc::new(RwLock::new(manager)) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[async_trait]
impl<R: CatalogRecord> CatalogStore<R> for SharedCatalog<R> {
    async fn list(&self, term: &str) -> Vec<R> {
        self.inner.read().await.list(term)
    }

    async fn get(&self, id: u64) -> Result<R, ServiceError> {
        self.inner
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(R::KIND))
    }

    async fn create(&self, input: R::Input) -> Result<R, ServiceError> {
        self.inner.write().await.add(input)
    }

    async fn update(&self, id: u64, input: R::Input) -> Result<Option<R>, ServiceError> {
        self.inner.write().await.update(id, input)
    }

    async fn delete(&self, id: u64) -> bool {
        self.inner.write().await.remove(id)
    }

    async fn summary(&self) -> Summary {
        self.inner.read().await.summary()
    }
}
