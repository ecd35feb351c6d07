use super::SnapshotStore;
use crate::error::{Result, RolodexError};
use crate::model::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_BOOK_FILE: &str = "addressbook.json";

pub struct FileStore {
    root: PathBuf,
    book_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            book_file: DEFAULT_BOOK_FILE.to_string(),
        }
    }

    pub fn with_book_file(mut self, name: &str) -> Self {
        self.book_file = name.to_string();
        self
    }

    pub fn book_path(&self) -> PathBuf {
        self.root.join(&self.book_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RolodexError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let path = self.book_path();
        if !path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(path).map_err(RolodexError::Io)?;
        let book = serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;
        fs::write(self.book_path(), content).map_err(RolodexError::Io)?;
        Ok(())
    }
}
