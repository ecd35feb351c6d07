use crate::error::{Result, RolodexError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How many days ahead the upcoming-birthday query looks (inclusive).
const BIRTHDAY_LOOKAHEAD_DAYS: i64 = 7;

/// A contact's display name. Doubles as the record's key in the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly 10 ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn new(text: &str) -> Result<Self> {
        if text.len() != 10 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RolodexError::InvalidPhone);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, entered as `DD.MM.YYYY` and required to be a real calendar
/// date. Displayed back in the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(text: &str) -> Result<Self> {
        let mut parts = text.split('.');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y), None)
                if d.len() == 2 && m.len() == 2 && y.len() == 4 =>
            {
                (d, m, y)
            }
            _ => return Err(RolodexError::InvalidDate),
        };
        let day: u32 = day.parse().map_err(|_| RolodexError::InvalidDate)?;
        let month: u32 = month.parse().map_err(|_| RolodexError::InvalidDate)?;
        let year: i32 = year.parse().map_err(|_| RolodexError::InvalidDate)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(RolodexError::InvalidDate)?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's occurrence in `year`. A Feb 29 birthday lands on
    /// March 1 when `year` is not a leap year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year"))
    }

    /// The first occurrence on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, text: &str) -> Result<()> {
        let phone = Phone::new(text)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Append an already-validated phone number.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `number`.
    pub fn remove_phone(&mut self, number: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == number)
            .ok_or(RolodexError::PhoneNotFound)?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its
    /// position in the list. The lookup happens before validation, so an
    /// absent `old` reports `PhoneNotFound` even when `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or(RolodexError::PhoneNotFound)?;
        self.phones[pos] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validate and set the birthday, replacing any existing one.
    pub fn add_birthday(&mut self, text: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "No birthday".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

/// A row returned by [`AddressBook::upcoming_birthdays`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// The keyed store of records. Keys are name text; iteration is ascending
/// by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, silently replacing any existing entry
    /// with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the next 7 days (both ends
    /// inclusive, so a birthday today counts and so does one exactly 7 days
    /// out). A birthday that already passed this year is considered for next
    /// year, which covers the December-to-January wrap. The congratulation
    /// date is the literal calendar date; no weekend shifting is applied.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let congratulation_date = birthday.next_occurrence(today);
            let days_until = (congratulation_date - today).num_days();
            if (0..=BIRTHDAY_LOOKAHEAD_DAYS).contains(&days_until) {
                upcoming.push(UpcomingBirthday {
                    name: record.name.as_str().to_string(),
                    congratulation_date,
                });
            }
        }
        upcoming
    }
}
