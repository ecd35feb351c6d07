use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Phone number must be a 10-digit number")]
    InvalidPhone,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate,

    #[error("Phone number not found")]
    PhoneNotFound,

    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
