use crate::book::AddressBook;
use crate::commands::{CmdResult, ContactLine};
use crate::error::{Result, RoloError};

/// Report the named record's phone list.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let contact = book
        .get(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_listed(vec![ContactLine::new(name, contact)]))
}
