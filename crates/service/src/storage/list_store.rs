use models::CatalogRecord;

/// Insertion-ordered in-memory record sequence keyed by record id.
///
/// Lookups are linear; collections are the size of an admin table.
#[derive(Debug, Clone)]
pub struct ListStore<R> {
    items: Vec<R>,
}

impl<R: CatalogRecord> ListStore<R> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build from existing records, keeping the first record for any
    /// repeated id.
    pub fn from_records(records: Vec<R>) -> Self {
        let mut store = Self::new();
        for record in records {
            if store.get(record.id()).is_none() {
                store.items.push(record);
            } else {
                tracing::warn!(kind = R::KIND, id = record.id(), "duplicate id dropped");
            }
        }
        store
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Append at the end of the sequence.
    pub fn push(&mut self, record: R) {
        self.items.push(record);
    }

    /// Replace the record with the same id in place; returns whether one existed.
    pub fn replace(&mut self, record: R) -> bool {
        match self.items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove by id; returns whether it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }

    pub fn max_id(&self) -> u64 {
        self.items.iter().map(|r| r.id()).max().unwrap_or(0)
    }
}

impl<R: CatalogRecord> Default for ListStore<R> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::seed::seed_courses;
    use models::Course;

    #[test]
    fn list_store_crud_keeps_order() {
        let mut store = ListStore::from_records(seed_courses());
        assert_eq!(store.len(), 8);
        assert_eq!(store.max_id(), 8);

        // replace in place keeps position
        let mut third = store.get(3).cloned().unwrap();
        third.fee = "KES 1".into();
        assert!(store.replace(third));
        let ids: Vec<u64> = store.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(store.get(3).unwrap().fee, "KES 1");

        // remove and remove again
        assert!(store.remove(3));
        assert!(!store.remove(3));
        assert_eq!(store.len(), 7);
        assert!(store.get(3).is_none());
    }

    #[test]
    fn replace_missing_is_noop() {
        let mut store = ListStore::from_records(seed_courses());
        let mut ghost = store.get(1).cloned().unwrap();
        ghost.id = 99;
        assert!(!store.replace(ghost));
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut records = seed_courses();
        let mut dup = records[0].clone();
        dup.name = "Shadow".into();
        records.push(dup);
        let store = ListStore::from_records(records);
        assert_eq!(store.len(), 8);
        assert_ne!(store.get(1).unwrap().name, "Shadow");
    }

    #[test]
    fn empty_store_max_id_is_zero() {
        let store: ListStore<Course> = ListStore::default();
        assert!(store.is_empty());
        assert_eq!(store.max_id(), 0);
    }
}
