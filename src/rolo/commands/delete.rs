use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Remove the whole record keyed by `name`.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.remove(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact \"{}\" has been deleted",
        name
    )));
    Ok(result)
}
