//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all rolodex operations, regardless of the UI
//! driving it.
//!
//! The facade owns the in-memory [`AddressBook`] for the session and the
//! [`SnapshotStore`] that persists it. The book is loaded once in [`open`]
//! and written back by [`save`]; every command in between is a pure
//! in-memory operation.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O or presentation**: it returns `CmdResult` data structures, never
//!   prints, and never assumes a terminal
//!
//! ## Generic Over SnapshotStore
//!
//! `RolodexApi<S: SnapshotStore>` is generic over the storage backend:
//! production uses `RolodexApi<FileStore>`, tests use
//! `RolodexApi<InMemoryStore>` and never touch the filesystem.
//!
//! [`open`]: RolodexApi::open
//! [`save`]: RolodexApi::save

use crate::commands;
use crate::error::Result;
use crate::model::AddressBook;
use crate::store::SnapshotStore;
use chrono::NaiveDate;

/// The main API facade for rolodex operations.
///
/// All UI clients (the REPL, or anything else) should interact through this
/// API.
pub struct RolodexApi<S: SnapshotStore> {
    store: S,
    book: AddressBook,
}

impl<S: SnapshotStore> RolodexApi<S> {
    /// Open the store and load the persisted book (empty if no snapshot
    /// exists yet).
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self { store, book })
    }

    /// Persist the current book back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_contact(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn show_phone(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        commands::birthday::add(&mut self.book, name, date)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::birthday::upcoming(&self.book, today)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
