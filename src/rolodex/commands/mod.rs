use crate::model::{Record, UpcomingBirthday};

pub mod add;
pub mod birthday;
pub mod change;
pub mod list;
pub mod phone;
pub mod remove;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub contacts: Vec<Record>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }
}
