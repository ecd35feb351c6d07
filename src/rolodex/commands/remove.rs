use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.delete(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact '{}' removed.", name)));
    Ok(result)
}
