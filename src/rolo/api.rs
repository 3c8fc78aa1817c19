//! # API facade
//!
//! [`RoloApi`] is a thin facade over the command layer and the single entry
//! point for every UI. It owns the in-memory [`AddressBook`] and the snapshot
//! store, stamps "today" onto the date-sensitive operations, and returns
//! structured `Result<CmdResult>` values. No stdout, no stderr, no exit codes
//! from here inward.
//!
//! Generic over [`SnapshotStore`] so production runs on `FileStore` and tests
//! run on `InMemoryStore`.

use chrono::{Local, NaiveDate};

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::SnapshotStore;

pub struct RoloApi<S: SnapshotStore> {
    book: AddressBook,
    store: S,
}

impl<S: SnapshotStore> RoloApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            book: AddressBook::new(),
            store,
        }
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phones::run(&self.book, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.book, name, phone)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        commands::birthday::set(&mut self.book, name, date, today())
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::days(&self.book, name, today())
    }

    pub fn show_page(&self, page_number: usize, page_size: usize) -> Result<commands::CmdResult> {
        commands::show::run(&self.book, page_number, page_size)
    }

    pub fn search(&self, name_term: &str, phone_term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, name_term, phone_term)
    }

    /// Merge the stored snapshot over the in-memory book.
    pub fn load(&mut self) -> Result<()> {
        self.book.load(&self.store)
    }

    /// Flush the book to the snapshot store.
    pub fn save(&mut self) -> Result<()> {
        self.book.save(&mut self.store)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use commands::{CmdMessage, CmdResult, ContactLine, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoloError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn save_then_load_round_trips_through_the_store() {
        let mut api = RoloApi::new(InMemoryStore::new());
        api.add_contact("oleksandr", "0991234567").unwrap();
        api.add_contact("oleksandr", "0991234568").unwrap();
        api.save().unwrap();

        // Wipe the in-memory book; a load restores everything from the store.
        api.book = AddressBook::new();
        api.load().unwrap();

        let contact = api.book().get("oleksandr").unwrap();
        assert_eq!(contact.phones().len(), 2);
    }

    #[test]
    fn load_merges_over_existing_entries() {
        let mut api = RoloApi::new(InMemoryStore::new());
        api.add_contact("oleksandr", "0991234567").unwrap();
        api.save().unwrap();

        // New in-memory state for the same key plus an extra record, then a
        // load: the snapshot entry wins on the collision, the extra survives.
        api.delete_contact("oleksandr").unwrap();
        api.add_contact("oleksandr", "0990000000").unwrap();
        api.add_contact("bohdan", "0661112233").unwrap();
        api.load().unwrap();

        assert_eq!(api.book().len(), 2);
        assert_eq!(
            api.book().get("oleksandr").unwrap().phones()[0].as_str(),
            "0991234567"
        );
    }

    #[test]
    fn load_without_a_snapshot_is_unavailable() {
        let mut api = RoloApi::new(InMemoryStore::new());
        assert!(matches!(
            api.load(),
            Err(RoloError::SnapshotUnavailable(_))
        ));
        assert!(api.book().is_empty());
    }

    #[test]
    fn operations_dispatch_to_the_command_layer() {
        let mut api = RoloApi::new(InMemoryStore::new());
        api.add_contact("oleksandr", "0991234567").unwrap();

        let listed = api.phones("oleksandr").unwrap();
        assert_eq!(listed.listed.len(), 1);

        let page = api.show_page(1, 10).unwrap();
        assert_eq!(page.listed.len(), 1);

        let found = api.search("olek", "").unwrap();
        assert_eq!(found.matches.len(), 1);

        api.delete_contact("oleksandr").unwrap();
        assert!(api.book().is_empty());
    }
}
