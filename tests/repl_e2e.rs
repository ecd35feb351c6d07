use assert_cmd::Command;
use chrono::{Days, Local};
use predicates::prelude::*;

fn rolodex(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.env("ROLODEX_HOME", data_dir);
    cmd
}

#[test]
fn greets_and_says_goodbye() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("hello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact data saved. Good bye!"));
}

#[test]
fn add_and_list_contacts() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("add John 1234567890\nadd John 5555555555\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 1234567890, 5555555555, birthday: No birthday",
        ));
}

#[test]
fn empty_book_lists_nothing() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact list is empty"));
}

#[test]
fn rejects_malformed_phone() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("add John 123\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone number must be a 10-digit number",
        ));
}

#[test]
fn change_and_show_phone() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin(
            "add John 1234567890\nchange John 1234567890 0987654321\nphone John\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact changed."))
        .stdout(predicate::str::contains(
            "Phone number for contact John: 0987654321",
        ));
}

#[test]
fn change_unknown_contact_reports_not_found() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("change John 1234567890 0987654321\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact not found."));
}

#[test]
fn remove_contact() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("add John 1234567890\nremove John\nremove John\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'John' removed."))
        .stdout(predicate::str::contains("Contact 'John' not found."))
        .stdout(predicate::str::contains("Contact list is empty"));
}

#[test]
fn birthday_commands() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin(
            "add John 1234567890\nshow-birthday John\nadd-birthday John 17.03.1990\nshow-birthday John\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("No birthday found for contact John."))
        .stdout(predicate::str::contains("Birthday added."))
        .stdout(predicate::str::contains("Birthday for contact John: 17.03.1990"));
}

#[test]
fn rejects_malformed_birthday() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("add John 1234567890\nadd-birthday John 1990-03-17\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date format. Use DD.MM.YYYY"));
}

#[test]
fn upcoming_birthdays_within_window() {
    let temp = tempfile::tempdir().unwrap();
    let in_three_days = Local::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .unwrap();
    // A leap birth year keeps the input valid even when the target date is
    // Feb 29
    let birthday = in_three_days.format("%d.%m.1992").to_string();
    let congratulation = in_three_days.format("%Y-%m-%d").to_string();

    rolodex(temp.path())
        .write_stdin(format!(
            "add John 1234567890\nadd-birthday John {}\nbirthdays\nexit\n",
            birthday
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Contact name: John, congratulation date: {}",
            congratulation
        )));
}

#[test]
fn no_upcoming_birthdays_message() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("birthdays\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming birthdays."));
}

#[test]
fn data_persists_between_sessions() {
    let temp = tempfile::tempdir().unwrap();

    rolodex(temp.path())
        .write_stdin("add John 1234567890\nadd-birthday John 17.03.1990\nexit\n")
        .assert()
        .success();

    rolodex(temp.path())
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 1234567890, birthday: 17.03.1990",
        ));
}

#[test]
fn unknown_and_incomplete_commands() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("frobnicate\nadd John\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Give me name and phone please."));
}

#[test]
fn eof_saves_and_exits() {
    let temp = tempfile::tempdir().unwrap();
    rolodex(temp.path())
        .write_stdin("add John 1234567890\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact data saved. Good bye!"));

    rolodex(temp.path())
        .write_stdin("phone John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone number for contact John: 1234567890",
        ));
}
