use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Contact list is empty"));
        return Ok(result);
    }
    Ok(CmdResult::default().with_contacts(book.records().cloned().collect()))
}
