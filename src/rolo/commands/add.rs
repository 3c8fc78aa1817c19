use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, Name};

/// Create-or-append: a new name gets a fresh record with its first phone, an
/// existing name gets the phone appended. An invalid phone leaves the book
/// untouched either way.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.get_mut(name) {
        Some(contact) => {
            contact.add_phone(phone)?;
            result.add_message(CmdMessage::success(format!(
                "New phone number for {} has been added",
                name
            )));
        }
        None => {
            let mut contact = Contact::new(Name::new(name));
            contact.add_phone(phone)?;
            book.add_record(contact);
            result.add_message(CmdMessage::success("New contact added"));
        }
    }
    Ok(result)
}
