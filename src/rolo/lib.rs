//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact-book library** with a CLI client. The
//! interactive command loop is just one consumer; everything from the API
//! facade inward takes plain Rust arguments and returns structured results.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (main.rs + bin-local args/repl modules)
//!   - clap arguments, the read-line loop, colored rendering
//!   - the ONLY place that knows about stdin/stdout/exit codes
//!           │
//!           ▼
//! API layer (api.rs)
//!   - RoloApi<S: SnapshotStore>: owns the book + store, stamps "today"
//!   - dispatches to commands, returns Result<CmdResult>
//!           │
//!           ▼
//! Command layer (commands/*.rs)
//!   - one module per operation, pure business logic, no I/O
//!           │
//!           ▼
//! Core + storage (model.rs, book.rs, store/)
//!   - validated field types, the record, the keyed book
//!   - SnapshotStore trait: FileStore (production), InMemoryStore (tests)
//! ```
//!
//! ## Legacy behavior
//!
//! Two operations, `change` and `set_birthday`, deliberately keep the
//! inverted loose-check guards of the program this tool replaces; see
//! [`model::LEGACY_INVERTED_GUARD`]. Tests pin that behavior — do not "fix"
//! it without reading the constant's documentation first.
//!
//! ## Module overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic per command, plus `CmdResult`/`CmdMessage`
//! - [`book`]: the keyed contact collection: paging, both searches, load/save
//! - [`model`]: field value types (`Name`, `Phone`, `Birthday`) and `Contact`
//! - [`store`]: the snapshot persistence boundary
//! - [`error`]: error types and the crate `Result` alias

pub mod api;
pub mod book;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
