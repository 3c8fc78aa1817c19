use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};

/// Remove one phone value from the named record.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let contact = book
        .get_mut(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
    contact.remove_phone(phone)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone number \"{}\" has been removed",
        phone
    )));
    Ok(result)
}
