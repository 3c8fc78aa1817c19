use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoloError};
use crate::model::{Contact, Phone};
use crate::store::SnapshotStore;

/// The keyed collection of contacts. Every key equals the contact's own name;
/// the map's (sorted) iteration order is the pagination order, which keeps
/// paging stable across save/load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry keyed by the contact's name.
    pub fn add_record(&mut self, contact: Contact) {
        self.records
            .insert(contact.name().as_str().to_string(), contact);
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Result<Contact> {
        self.records
            .remove(name)
            .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.records.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// One page of the book's current iteration order. Page numbers are
    /// 1-based; out-of-range pages (page 0 included) come back empty rather
    /// than erroring. This is a single-shot fetch, recomputed from the full
    /// ordering on every call.
    pub fn page(&self, page_number: usize, page_size: usize) -> Vec<(&str, &Contact)> {
        let Some(skipped_pages) = page_number.checked_sub(1) else {
            return Vec::new();
        };
        self.iter()
            .skip(skipped_pages.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    /// Case-insensitive substring match against every name. The empty string
    /// matches everything. Returns each matching name with its full phone
    /// sequence.
    pub fn search_name(&self, target: &str) -> BTreeMap<String, Vec<Phone>> {
        let needle = target.to_lowercase();
        self.records
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, contact)| (name.clone(), contact.phones().to_vec()))
            .collect()
    }

    /// Case-sensitive substring match against every phone's text. A record
    /// with any matching phone contributes its full phone sequence, not just
    /// the matching entry.
    pub fn search_phone(&self, target: &str) -> BTreeMap<String, Vec<Phone>> {
        self.records
            .iter()
            .filter(|(_, contact)| {
                contact
                    .phones()
                    .iter()
                    .any(|phone| phone.as_str().contains(target))
            })
            .map(|(name, contact)| (name.clone(), contact.phones().to_vec()))
            .collect()
    }

    /// Hand the whole mapping to the snapshot store.
    pub fn save<S: SnapshotStore>(&self, store: &mut S) -> Result<()> {
        store.save(self)
    }

    /// Merge a saved snapshot over the in-memory book, loaded entries winning
    /// on key collisions. Fails with `SnapshotUnavailable` when there is no
    /// readable snapshot, leaving the book unchanged.
    pub fn load<S: SnapshotStore>(&mut self, store: &S) -> Result<()> {
        let loaded = store.load()?;
        for (name, contact) in loaded.records {
            self.records.insert(name, contact);
        }
        Ok(())
    }
}
