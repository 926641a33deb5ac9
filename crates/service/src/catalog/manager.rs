use std::sync::Arc;

use models::{CatalogRecord, Validate};
use tracing::{debug, info};

use crate::catalog::summary::{summarize, Summary};
use crate::errors::ServiceError;
use crate::ids::IdGenerator;
use crate::metrics;
use crate::notify::{Notification, Notifier};
use crate::storage::list_store::ListStore;

/// Filterable, editable collection of one record kind.
///
/// All operations run synchronously to completion against the owned
/// collection. Mutations emit a [`Notification`]; validation failures emit
/// nothing and leave the collection untouched.
pub struct ListManager<R: CatalogRecord> {
    store: ListStore<R>,
    ids: IdGenerator,
    notifier: Arc<dyn Notifier>,
}

impl<R: CatalogRecord> ListManager<R> {
    pub fn new(records: Vec<R>, notifier: Arc<dyn Notifier>) -> Self {
        let store = ListStore::from_records(records);
        let ids = IdGenerator::starting_after(store.max_id());
        Self { store, ids, notifier }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Records whose name or category contains `term`, case-insensitively,
    /// in insertion order. Only the empty term returns everything; whitespace
    /// is matched literally.
    pub fn list(&self, term: &str) -> Vec<R> {
        let needle = term.to_lowercase();
        let found: Vec<R> = self.store.iter().filter(|r| r.matches(&needle)).cloned().collect();
        debug!(kind = R::KIND, term = %needle, count = found.len(), "list");
        found
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.store.get(id)
    }

    /// Validate and append a new record under a fresh id.
    pub fn add(&mut self, input: R::Input) -> Result<R, ServiceError> {
        self.check(&input)?;
        let record = R::from_input(self.ids.next_id(), input);
        self.store.push(record.clone());
        info!(kind = R::KIND, id = record.id(), count = self.store.len(), "record added");
        metrics::record_operation(R::KIND, "add");
        self.emit(
            format!("{} Added", R::LABEL),
            format!("{} has been successfully added.", record.name()),
        );
        Ok(record)
    }

    /// Validate and overwrite every field of record `id`, keeping the id.
    ///
    /// A missing record is not an error: nothing changes and `Ok(None)` is
    /// returned. The update notification is emitted either way.
    pub fn update(&mut self, id: u64, input: R::Input) -> Result<Option<R>, ServiceError> {
        self.check(&input)?;
        let record = R::from_input(id, input);
        let name = record.name().to_string();
        let updated = if self.store.replace(record.clone()) {
            info!(kind = R::KIND, id, "record updated");
            Some(record)
        } else {
            debug!(kind = R::KIND, id, "update target missing; ignored");
            None
        };
        metrics::record_operation(R::KIND, "update");
        self.emit(
            format!("{} Updated", R::LABEL),
            format!("{name} has been successfully updated."),
        );
        Ok(updated)
    }

    /// Remove record `id` if present. Emits the delete notification whether
    /// or not anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let existed = self.store.remove(id);
        if existed {
            info!(kind = R::KIND, id, count = self.store.len(), "record deleted");
        } else {
            debug!(kind = R::KIND, id, "delete target missing; ignored");
        }
        metrics::record_operation(R::KIND, "delete");
        self.emit(
            format!("{} Deleted", R::LABEL),
            format!("{} has been successfully deleted.", R::LABEL),
        );
        existed
    }

    pub fn summary(&self) -> Summary {
        summarize(self.store.iter())
    }

    fn check(&self, input: &R::Input) -> Result<(), ServiceError> {
        input.validate().map_err(|errors| {
            debug!(kind = R::KIND, %errors, "validation failed");
            metrics::record_validation_failure(R::KIND);
            ServiceError::Validation(errors)
        })
    }

    fn emit(&self, title: String, message: String) {
        self.notifier.notify(&Notification::success(title, message));
    }
}
