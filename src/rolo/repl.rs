use rolo::error::{Result, RoloError};

/// One parsed command-loop operation. Arguments that the loop gathers
/// interactively (the old phone for `change`, the paging numbers for
/// `show all`) are not part of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, new_phone: String },
    Phone { name: String },
    Delete { name: String },
    Remove { name: String, phone: String },
    SetBirthday { name: String, date: String },
    Birthday { name: String },
    ShowAll,
    Search { name_term: String, phone_term: String },
    Quit,
    Empty,
}

/// Turn one input line into an operation. The whole line is lowercased
/// before splitting, so names are effectively stored lowercase.
pub fn parse_line(line: &str) -> Result<Op> {
    let line = line.trim().to_lowercase();
    if line.is_empty() {
        return Ok(Op::Empty);
    }

    let mut parts = line.split_whitespace();
    let op = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match op {
        "hello" => Ok(Op::Hello),
        "add" => match args[..] {
            [name, phone] => Ok(Op::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            _ => usage("add <name> <phone>"),
        },
        "change" => match args[..] {
            [name, new_phone] => Ok(Op::Change {
                name: name.to_string(),
                new_phone: new_phone.to_string(),
            }),
            _ => usage("change <name> <new phone>"),
        },
        "phone" => match args[..] {
            [name] => Ok(Op::Phone {
                name: name.to_string(),
            }),
            _ => usage("phone <name>"),
        },
        "delete" => match args[..] {
            [name] => Ok(Op::Delete {
                name: name.to_string(),
            }),
            _ => usage("delete <name>"),
        },
        "remove" => match args[..] {
            [name, phone] => Ok(Op::Remove {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
            _ => usage("remove <name> <phone>"),
        },
        "set_birthday" => match args[..] {
            [name, date] => Ok(Op::SetBirthday {
                name: name.to_string(),
                date: date.to_string(),
            }),
            _ => usage("set_birthday <name> <yyyy-mm-dd>"),
        },
        "birthday" => match args[..] {
            [name] => Ok(Op::Birthday {
                name: name.to_string(),
            }),
            _ => usage("birthday <name>"),
        },
        // "show" alone resolves to "show all", matching the original loop.
        "show" => match args[..] {
            [] | ["all"] => Ok(Op::ShowAll),
            _ => usage("show all"),
        },
        "search" => match args[..] {
            [name_term, phone_term] => Ok(Op::Search {
                name_term: name_term.to_string(),
                phone_term: phone_term.to_string(),
            }),
            _ => usage("search <name> <phone>"),
        },
        "good" => match args[..] {
            [] | ["bye"] => Ok(Op::Quit),
            _ => Err(RoloError::UnknownCommand(line.clone())),
        },
        "close" | "exit" => Ok(Op::Quit),
        other => Err(RoloError::UnknownCommand(other.to_string())),
    }
}

fn usage(expected: &str) -> Result<Op> {
    Err(RoloError::MalformedCommand(format!("usage: {}", expected)))
}
