use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Combined search: the name search runs first, and the phone search is the
/// fallback when it comes up empty.
pub fn run(book: &AddressBook, name_term: &str, phone_term: &str) -> Result<CmdResult> {
    let by_name = book.search_name(name_term);
    let matches = if by_name.is_empty() {
        book.search_phone(phone_term)
    } else {
        by_name
    };

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("Nothing found"));
    }
    Ok(result.with_matches(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        add::run(&mut book, "oleksandr", "0991234567").unwrap();
        add::run(&mut book, "olena", "0507654321").unwrap();
        add::run(&mut book, "bohdan", "0661112233").unwrap();
        book
    }

    #[test]
    fn name_matches_win() {
        let book = sample_book();
        let result = run(&book, "ole", "066").unwrap();
        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.contains_key("oleksandr"));
        assert!(result.matches.contains_key("olena"));
    }

    #[test]
    fn phone_search_is_the_fallback() {
        let book = sample_book();
        let result = run(&book, "zzz", "111").unwrap();
        assert_eq!(result.matches.len(), 1);
        assert!(result.matches.contains_key("bohdan"));
    }

    #[test]
    fn no_matches_reports_nothing_found() {
        let book = sample_book();
        let result = run(&book, "zzz", "999").unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.messages[0].content, "Nothing found");
    }

    #[test]
    fn empty_name_term_matches_everyone() {
        let book = sample_book();
        let result = run(&book, "", "999").unwrap();
        assert_eq!(result.matches.len(), 3);
    }
}
