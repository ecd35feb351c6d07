use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Name, Phone, Record};

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    // Validate before touching the book so a bad phone never creates an
    // empty record
    let phone = Phone::new(phone)?;

    match book.find_mut(name) {
        Some(record) => record.push_phone(phone),
        None => {
            let mut record = Record::new(Name::new(name));
            record.push_phone(phone);
            book.add_record(record);
        }
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contact added."));
    Ok(result)
}
