use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};

/// Replace every occurrence of `old` in the named record with `new`, subject
/// to the legacy guard in `Contact::change_phone`.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let contact = book
        .get_mut(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
    let replaced = contact.change_phone(old, new)?;

    let mut result = CmdResult::default();
    if replaced == 0 {
        result.add_message(CmdMessage::warning(format!(
            "No phone number {} on record for {}",
            old, name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Phone number {} has been changed to {}",
            old, new
        )));
    }
    Ok(result)
}
