use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;
use chrono::NaiveDate;

pub fn add(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            result.add_message(CmdMessage::success("Birthday added."));
        }
        None => result.add_message(CmdMessage::error("Contact not found.")),
    }
    Ok(result)
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => result.add_message(CmdMessage::info(format!(
                "Birthday for contact {}: {}",
                name, birthday
            ))),
            None => result.add_message(CmdMessage::error(format!(
                "No birthday found for contact {}.",
                name
            ))),
        },
        None => result.add_message(CmdMessage::error("Contact not found.")),
    }
    Ok(result)
}

pub fn upcoming(book: &AddressBook, today: NaiveDate) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No upcoming birthdays."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_upcoming(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add as add_contact, MessageLevel};
    use crate::error::RolodexError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn adds_birthday_to_existing_contact() {
        let mut book = AddressBook::new();
        add_contact::run(&mut book, "John", "1234567890").unwrap();

        let result = add(&mut book, "John", "17.03.1990").unwrap();
        assert_eq!(result.messages[0].content, "Birthday added.");
        assert_eq!(
            book.find("John").unwrap().birthday().unwrap().to_string(),
            "17.03.1990"
        );
    }

    #[test]
    fn add_to_unknown_contact_reports_message() {
        let mut book = AddressBook::new();
        let result = add(&mut book, "John", "17.03.1990").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert_eq!(result.messages[0].content, "Contact not found.");
    }

    #[test]
    fn malformed_date_is_an_error() {
        let mut book = AddressBook::new();
        add_contact::run(&mut book, "John", "1234567890").unwrap();
        let err = add(&mut book, "John", "1990-03-17").unwrap_err();
        assert!(matches!(err, RolodexError::InvalidDate));
    }

    #[test]
    fn shows_birthday_when_present() {
        let mut book = AddressBook::new();
        add_contact::run(&mut book, "John", "1234567890").unwrap();
        add(&mut book, "John", "17.03.1990").unwrap();

        let result = show(&book, "John").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Birthday for contact John: 17.03.1990"
        );
    }

    #[test]
    fn show_without_birthday_reports_message() {
        let mut book = AddressBook::new();
        add_contact::run(&mut book, "John", "1234567890").unwrap();

        let result = show(&book, "John").unwrap();
        assert_eq!(
            result.messages[0].content,
            "No birthday found for contact John."
        );
    }

    #[test]
    fn show_unknown_contact_reports_message() {
        let book = AddressBook::new();
        let result = show(&book, "John").unwrap();
        assert_eq!(result.messages[0].content, "Contact not found.");
    }

    #[test]
    fn upcoming_returns_entries_in_window() {
        let mut book = AddressBook::new();
        add_contact::run(&mut book, "John", "1234567890").unwrap();
        add(&mut book, "John", "03.06.1990").unwrap();

        let result = upcoming(&book, date(2024, 6, 1)).unwrap();
        assert_eq!(result.upcoming.len(), 1);
        assert_eq!(result.upcoming[0].name, "John");
        assert_eq!(result.upcoming[0].congratulation_date, date(2024, 6, 3));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn upcoming_reports_empty_window() {
        let book = AddressBook::new();
        let result = upcoming(&book, date(2024, 6, 1)).unwrap();
        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, "No upcoming birthdays.");
    }
}
