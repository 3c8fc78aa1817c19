use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};

/// Set (or replace) the named record's birthday, via the legacy guard in
/// `Contact::add_birthday`.
pub fn set(book: &mut AddressBook, name: &str, date: &str, today: NaiveDate) -> Result<CmdResult> {
    let contact = book
        .get_mut(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
    contact.add_birthday(date, today)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Birthday {} has been added to {}",
        date, name
    )));
    Ok(result)
}

/// Report how many days remain until the named record's next birthday;
/// "Empty" when no birthday is set.
pub fn days(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let contact = book
        .get(name)
        .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;

    let mut result = CmdResult::default();
    match contact.days_to_birthday(today) {
        Some(0) => result.add_message(CmdMessage::success(format!(
            "{}'s birthday is today",
            name
        ))),
        Some(days) => result.add_message(CmdMessage::info(format!(
            "{} days until {}'s birthday",
            days, name
        ))),
        None => result.add_message(CmdMessage::info("Empty")),
    }
    Ok(result)
}
