/// Monotonic record identifier source.
///
/// Ids are handed out in increasing order starting after the highest id
/// already in the collection, and are never reused after a delete.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn starting_after(max_existing: u64) -> Self {
        Self { next: max_existing.saturating_add(1) }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self { Self::starting_after(0) }
}
