use super::SnapshotStore;
use crate::error::Result;
use crate::model::AddressBook;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: Option<AddressBook>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = Some(book.clone());
        Ok(())
    }
}
