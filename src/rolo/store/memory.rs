use super::SnapshotStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// Snapshot store that keeps the last saved book in memory. For tests; does
/// NOT persist anything.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<AddressBook>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(book.clone());
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        self.snapshot
            .clone()
            .ok_or_else(|| RoloError::SnapshotUnavailable("no snapshot taken".to_string()))
    }
}
