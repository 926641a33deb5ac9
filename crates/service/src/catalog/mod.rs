//! The list manager pattern shared by the course and service admin pages.

pub mod manager;
pub mod summary;
pub mod dialog;
pub mod shared;

use std::sync::Arc;

use models::seed::{seed_courses, seed_services};
use models::{Course, Service};

use crate::notify::{NotificationLog, Notifiers, TracingNotifier};

pub use dialog::{DialogError, DialogState};
pub use manager::ListManager;
pub use shared::SharedCatalog;
pub use summary::Summary;

/// Both admin collections plus the notification feed they write to.
#[derive(Clone)]
pub struct Catalog {
    pub courses: Arc<SharedCatalog<Course>>,
    pub services: Arc<SharedCatalog<Service>>,
    pub notifications: Arc<NotificationLog>,
}

impl Catalog {
    /// Build the catalog, optionally seeded with the built-in collections.
    /// Notifications go to the tracing log and a feed of `notification_capacity`.
    pub fn new(seed: bool, notification_capacity: usize) -> Self {
        let notifications = Arc::new(NotificationLog::new(notification_capacity));
        let notifier = Arc::new(
            Notifiers::new()
                .with(Arc::new(TracingNotifier))
                .with(notifications.clone()),
        );
        let (courses, services) = if seed {
            (seed_courses(), seed_services())
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            courses: SharedCatalog::new(courses, notifier.clone()),
            services: SharedCatalog::new(services, notifier),
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::catalog_store::CatalogStore;

    #[tokio::test]
    async fn seeded_catalog_has_both_collections() {
        let catalog = Catalog::new(true, 10);
        assert_eq!(catalog.courses.len().await, 8);
        assert_eq!(catalog.services.len().await, 6);
        assert!(catalog.notifications.is_empty());
    }

    #[tokio::test]
    async fn unseeded_catalog_starts_empty_and_ids_start_at_one() {
        let catalog = Catalog::new(false, 10);
        assert_eq!(catalog.courses.len().await, 0);
        let created = catalog
            .courses
            .create(models::CourseInput {
                name: "A".into(),
                description: "B".into(),
                duration: "C".into(),
                fee: "D".into(),
                category: "E".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(catalog.notifications.len(), 1);
    }
}
