use std::fs;
use std::path::{Path, PathBuf};

use super::SnapshotStore;
use crate::book::AddressBook;
use crate::error::{Result, RoloError};

/// File-backed snapshot store: the whole book as one pretty-printed JSON
/// artifact. Saves overwrite, loads read the file in full; a missing or
/// undecodable file is `SnapshotUnavailable`, never a panic.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(&self.path, content).map_err(RoloError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        let display = self.path.display().to_string();
        if !self.path.exists() {
            return Err(RoloError::SnapshotUnavailable(display));
        }
        let content =
            fs::read_to_string(&self.path).map_err(|_| RoloError::SnapshotUnavailable(display.clone()))?;
        serde_json::from_str(&content).map_err(|_| RoloError::SnapshotUnavailable(display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Name};
    use chrono::NaiveDate;

    fn sample_book() -> AddressBook {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let mut contact = Contact::new(Name::new("oleksandr"));
        contact.add_phone("0991234567").unwrap();
        contact.add_phone("0991234568").unwrap();
        contact.add_birthday("1990-05-20", today).unwrap();

        let mut book = AddressBook::new();
        book.add_record(contact);
        book
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));

        let book = sample_book();
        store.save(&book).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        let contact = loaded.get("oleksandr").unwrap();
        assert_eq!(contact.phones().len(), 2);
        assert_eq!(contact.phones()[0].as_str(), "0991234567");
        assert_eq!(contact.birthday().unwrap().to_string(), "1990-05-20");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("contacts.json"));
        store.save(&sample_book()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn missing_snapshot_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("contacts.json"));
        assert!(matches!(
            store.load(),
            Err(RoloError::SnapshotUnavailable(_))
        ));
    }

    #[test]
    fn corrupt_snapshot_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(RoloError::SnapshotUnavailable(_))
        ));
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));

        store.save(&sample_book()).unwrap();
        store.save(&AddressBook::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }
}
