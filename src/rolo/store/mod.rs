//! # Snapshot storage
//!
//! Persistence is abstracted behind the [`SnapshotStore`] trait so the core
//! never knows how, or whether, the book reaches disk:
//!
//! - [`fs::FileStore`]: production storage, one JSON artifact that is fully
//!   read or fully written (no partial-read recovery).
//! - [`memory::InMemoryStore`]: snapshot held in memory, for tests.
//!
//! A store must round-trip every field of every record exactly; the artifact
//! layout is otherwise its own business.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// The persistence boundary for the whole address book.
pub trait SnapshotStore {
    /// Persist the full book, replacing any prior snapshot.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Read the last snapshot back. `SnapshotUnavailable` when none exists
    /// or it cannot be decoded.
    fn load(&self) -> Result<AddressBook>;
}
