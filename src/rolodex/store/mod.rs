//! # Storage Layer
//!
//! This module defines the persistence abstraction for rolodex. The
//! [`SnapshotStore`] trait allows the application to work with different
//! storage backends.
//!
//! Persistence is whole-store: the entire [`AddressBook`] is loaded once at
//! startup and written back once at shutdown. There is no per-record I/O,
//! which keeps every command a pure in-memory operation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole book serialized as pretty-printed JSON in a single file
//!     (`addressbook.json` by default, configurable)
//!   - A missing snapshot loads as an empty book, not an error
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Round-trip Contract
//!
//! `load(save(book))` must reproduce the book exactly: every record, the
//! order of each record's phones, and every birthday value.

use crate::error::Result;
use crate::model::AddressBook;

pub mod fs;
pub mod memory;

/// Abstract interface for address-book persistence.
pub trait SnapshotStore {
    /// Load the persisted book. A store with no snapshot yet returns an
    /// empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the entire book, replacing any previous snapshot.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
