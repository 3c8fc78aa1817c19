use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactLine};
use crate::error::Result;

/// One page of the book, 1-based. Out-of-range pages are reported, not
/// errored.
pub fn run(book: &AddressBook, page_number: usize, page_size: usize) -> Result<CmdResult> {
    let listed: Vec<ContactLine> = book
        .page(page_number, page_size)
        .into_iter()
        .map(|(name, contact)| ContactLine::new(name, contact))
        .collect();

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts on page {}",
            page_number
        )));
    }
    Ok(result)
}
