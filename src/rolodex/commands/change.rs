use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old, new)?;
            result.add_message(CmdMessage::success("Contact changed."));
        }
        None => result.add_message(CmdMessage::error("Contact not found.")),
    }
    Ok(result)
}
