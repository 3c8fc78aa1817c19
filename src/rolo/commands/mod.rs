use std::collections::BTreeMap;

use crate::model::{Birthday, Contact, Phone};

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete;
pub mod phones;
pub mod remove;
pub mod search;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One rendered row of a listing: a contact flattened for display.
#[derive(Debug, Clone)]
pub struct ContactLine {
    pub name: String,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl ContactLine {
    pub fn new(name: &str, contact: &Contact) -> Self {
        Self {
            name: name.to_string(),
            phones: contact.phones().to_vec(),
            birthday: contact.birthday().copied(),
        }
    }
}

/// What a command hands back to the UI: listings, search matches, and
/// leveled messages. Commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ContactLine>,
    pub matches: BTreeMap<String, Vec<Phone>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ContactLine>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_matches(mut self, matches: BTreeMap<String, Vec<Phone>>) -> Self {
        self.matches = matches;
        self
    }
}
