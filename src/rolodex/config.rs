use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Configuration for rolodex, stored next to the data as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// File name of the address-book snapshot inside the data directory
    #[serde(default = "default_book_file")]
    pub book_file: String,
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            book_file: DEFAULT_BOOK_FILE.to_string(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    pub fn get_book_file(&self) -> &str {
        &self.book_file
    }

    pub fn set_book_file(&mut self, name: &str) {
        self.book_file = name.to_string();
    }
}
