use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolodex::api::{CmdMessage, MessageLevel, RolodexApi};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::model::{Record, UpcomingBirthday};
use rolodex::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RolodexApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;
    println!("Welcome to the assistant bot!");
    repl(&mut ctx)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = RolodexConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir).with_book_file(config.get_book_file());
    let api = RolodexApi::open(store)?;
    Ok(AppContext { api })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os("ROLODEX_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
        .ok_or_else(|| RolodexError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn repl(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter a command: ");
        io::stdout().flush().map_err(RolodexError::Io)?;

        line.clear();
        if stdin.lock().read_line(&mut line).map_err(RolodexError::Io)? == 0 {
            // EOF behaves like `exit`
            return shutdown(ctx);
        }

        let Some((command, args)) = parse_input(&line) else {
            println!("Invalid command.");
            continue;
        };

        match command.as_str() {
            "close" | "exit" => return shutdown(ctx),
            "hello" => println!("How can I help you?"),
            "add" => handle_add(ctx, &args),
            "change" => handle_change(ctx, &args),
            "phone" => handle_phone(ctx, &args),
            "remove" => handle_remove(ctx, &args),
            "all" => handle_all(ctx),
            "add-birthday" => handle_add_birthday(ctx, &args),
            "show-birthday" => handle_show_birthday(ctx, &args),
            "birthdays" => handle_birthdays(ctx),
            _ => println!("Invalid command."),
        }
    }
}

fn shutdown(ctx: &mut AppContext) -> Result<()> {
    ctx.api.save()?;
    println!("Contact data saved. Good bye!");
    Ok(())
}

/// Split a raw input line into a lowercased command and its arguments.
/// Returns None for a blank line.
fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.map(str::to_string).collect()))
}

fn handle_add(ctx: &mut AppContext, args: &[String]) {
    let [name, phone] = args else {
        println!("Give me name and phone please.");
        return;
    };
    report_messages(ctx.api.add_contact(name, phone));
}

fn handle_change(ctx: &mut AppContext, args: &[String]) {
    let [name, old, new] = args else {
        println!("Give me name, old phone, and new phone please.");
        return;
    };
    report_messages(ctx.api.change_contact(name, old, new));
}

fn handle_phone(ctx: &mut AppContext, args: &[String]) {
    let [name] = args else {
        println!("Enter the name for the command 'phone'");
        return;
    };
    report_messages(ctx.api.show_phone(name));
}

fn handle_remove(ctx: &mut AppContext, args: &[String]) {
    let [name] = args else {
        println!("Enter the name for the command 'remove'");
        return;
    };
    report_messages(ctx.api.remove_contact(name));
}

fn handle_all(ctx: &mut AppContext) {
    match ctx.api.list_contacts() {
        Ok(result) => {
            print_contacts(&result.contacts);
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
}

fn handle_add_birthday(ctx: &mut AppContext, args: &[String]) {
    let [name, date] = args else {
        println!("Give me name and birthday please.");
        return;
    };
    report_messages(ctx.api.add_birthday(name, date));
}

fn handle_show_birthday(ctx: &mut AppContext, args: &[String]) {
    let [name] = args else {
        println!("Enter the name for the command 'show-birthday'");
        return;
    };
    report_messages(ctx.api.show_birthday(name));
}

fn handle_birthdays(ctx: &mut AppContext) {
    let today = Local::now().date_naive();
    match ctx.api.upcoming_birthdays(today) {
        Ok(result) => {
            print_upcoming(&result.upcoming);
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
}

fn report_messages(result: Result<rolodex::api::CmdResult>) {
    match result {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
}

fn print_error(e: &RolodexError) {
    println!("{}", e.to_string().red());
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_contacts(contacts: &[Record]) {
    for record in contacts {
        println!("{}", record);
    }
}

fn print_upcoming(upcoming: &[UpcomingBirthday]) {
    for entry in upcoming {
        println!(
            "Contact name: {}, congratulation date: {}",
            entry.name,
            entry.congratulation_date.format("%Y-%m-%d")
        );
    }
}
