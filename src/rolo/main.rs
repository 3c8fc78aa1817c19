use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::{CmdMessage, CmdResult, ContactLine, MessageLevel, RoloApi};
use rolo::error::{Result, RoloError};
use rolo::model::Phone;
use rolo::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
mod repl;
use args::Cli;
use repl::Op;

const SNAPSHOT_FILENAME: &str = "contacts.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(snapshot_path(&cli));
    let mut api = RoloApi::new(store);

    match api.load() {
        Ok(()) => {}
        Err(RoloError::SnapshotUnavailable(_)) => {
            println!("{}", "No saved contacts found, starting fresh.".dimmed());
        }
        Err(e) => return Err(e),
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt("Enter command: ")?;
        let Some(line) = lines.next() else {
            // EOF behaves like an explicit exit: fall through to the save.
            break;
        };
        let line = line.map_err(RoloError::Io)?;

        match repl::parse_line(&line) {
            Ok(Op::Quit) => {
                println!("Good bye!");
                break;
            }
            Ok(Op::Empty) => continue,
            Ok(op) => {
                if let Err(e) = dispatch(&mut api, op, &mut lines) {
                    print_error(&e);
                }
            }
            Err(e) => print_error(&e),
        }
    }

    // A failed final save must reach the operator; run() surfaces it as a
    // process error instead of swallowing it.
    api.save()?;
    Ok(())
}

fn snapshot_path(cli: &Cli) -> PathBuf {
    match &cli.file {
        Some(file) => file.clone(),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
            proj_dirs.data_dir().join(SNAPSHOT_FILENAME)
        }
    }
}

fn dispatch(api: &mut RoloApi<FileStore>, op: Op, lines: &mut Lines) -> Result<()> {
    let result = match op {
        Op::Hello => {
            println!("How can I help you?");
            return Ok(());
        }
        Op::Add { name, phone } => api.add_contact(&name, &phone)?,
        Op::Change { name, new_phone } => {
            let old = ask(lines, "Enter phone number to change: ")?;
            api.change_phone(&name, &old, &new_phone)?
        }
        Op::Phone { name } => api.phones(&name)?,
        Op::Delete { name } => api.delete_contact(&name)?,
        Op::Remove { name, phone } => api.remove_phone(&name, &phone)?,
        Op::SetBirthday { name, date } => api.set_birthday(&name, &date)?,
        Op::Birthday { name } => api.days_to_birthday(&name)?,
        Op::ShowAll => {
            let page_number = ask_number(lines, "Enter page number: ")?;
            let page_size = ask_number(lines, "How many records per page: ")?;
            api.show_page(page_number, page_size)?
        }
        Op::Search {
            name_term,
            phone_term,
        } => api.search(&name_term, &phone_term)?,
        Op::Quit | Op::Empty => return Ok(()),
    };
    print_result(&result);
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush().map_err(RoloError::Io)
}

fn ask(lines: &mut Lines, text: &str) -> Result<String> {
    prompt(text)?;
    match lines.next() {
        Some(line) => Ok(line.map_err(RoloError::Io)?.trim().to_string()),
        None => Err(RoloError::MalformedCommand(
            "unexpected end of input".to_string(),
        )),
    }
}

fn ask_number(lines: &mut Lines, text: &str) -> Result<usize> {
    let answer = ask(lines, text)?;
    answer
        .parse()
        .map_err(|_| RoloError::MalformedCommand(format!("not a number: {}", answer)))
}

fn print_result(result: &CmdResult) {
    print_contacts(&result.listed);
    print_matches(&result.matches);
    print_messages(&result.messages);
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

fn print_contacts(contacts: &[ContactLine]) {
    if contacts.is_empty() {
        return;
    }

    let name_width = contacts
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    for contact in contacts {
        let padding = " ".repeat(name_width.saturating_sub(contact.name.width()));
        let phones = join_phones(&contact.phones);
        match &contact.birthday {
            Some(birthday) => println!(
                "  {}{}  {}  {}",
                contact.name.bold(),
                padding,
                phones,
                format!("({})", birthday).dimmed()
            ),
            None => println!("  {}{}  {}", contact.name.bold(), padding, phones),
        }
    }
}

fn print_matches(matches: &BTreeMap<String, Vec<Phone>>) {
    for (name, phones) in matches {
        println!("  {}: {}", name.bold(), join_phones(phones));
    }
}

fn join_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_error(err: &RoloError) {
    println!("{}", err.to_string().red());
}
