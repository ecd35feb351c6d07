use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Phone};

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find(name) {
        Some(record) => {
            let numbers = record
                .phones()
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            result.add_message(CmdMessage::info(format!(
                "Phone number for contact {}: {}",
                name, numbers
            )));
            result.contacts.push(record.clone());
        }
        None => result.add_message(CmdMessage::error("Contact not found.")),
    }
    Ok(result)
}
