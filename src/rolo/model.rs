use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoloError};

/// The program this tool replaces committed `change` and `set_birthday`
/// updates on the *failing* side of their loose format checks. That behavior
/// is load-bearing for existing users, so it is kept behind one named switch
/// instead of being silently corrected. Flipping it is the designated fix if
/// the polarity ever turns out to be unintended.
pub const LEGACY_INVERTED_GUARD: bool = true;

pub const PHONE_MIN_LEN: usize = 10;
pub const PHONE_MAX_LEN: usize = 12;

/// A contact's display name. Doubles as the unique key inside an
/// [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Wraps the raw text verbatim, no normalization. Emptiness is caught by
    /// the command adapter's argument checks, not here.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number, stored exactly as entered. Valid iff the length is within
/// [`PHONE_MIN_LEN`]..=[`PHONE_MAX_LEN`] and every character is a decimal
/// digit. No punctuation stripping; equality and search are exact text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !Self::looks_like_phone(&raw) || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(RoloError::InvalidPhone(raw));
        }
        Ok(Self(raw))
    }

    /// Loose classification: the length window only, no digit check. Weaker
    /// than [`Phone::new`] on purpose; `change_phone` branches on this.
    pub fn looks_like_phone(raw: &str) -> bool {
        (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&raw.len())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, rendered as `YYYY-MM-DD`.
///
/// Two validation paths exist and stay independent: the strict constructor
/// ([`Birthday::parse`]) and the loose component range check
/// ([`Birthday::component_check`]). They use different separators and are
/// never jointly enforced on the same input; `Contact::add_birthday` plays
/// one against the other (see [`LEGACY_INVERTED_GUARD`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Strict constructor: `%Y-%m-%d`, never in the future.
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self> {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| RoloError::InvalidBirthday(raw.to_string()))?;
        if date > today {
            return Err(RoloError::InvalidBirthday(raw.to_string()));
        }
        Ok(Self(date))
    }

    /// Dot-separated component range check: `0 < year <= current year`,
    /// month in 1..=12, day in 1..=31. The day is not checked against the
    /// month, so `1999.02.31` passes. Malformed input returns `false` rather
    /// than erroring.
    pub fn component_check(raw: &str, today: NaiveDate) -> bool {
        let mut parts = raw.split('.');
        let numbers = (parts.next(), parts.next(), parts.next(), parts.next());
        let (Some(year), Some(month), Some(day), None) = numbers else {
            return false;
        };
        let (Ok(year), Ok(month), Ok(day)) =
            (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
        else {
            return false;
        };
        (1..=today.year()).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next anniversary of this date (0 when the
    /// anniversary is today). Feb 29 falls back to Mar 1 in non-leap years.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let this_year = anniversary_in(self.0, today.year());
        let next = if this_year >= today {
            this_year
        } else {
            anniversary_in(self.0, today.year() + 1)
        };
        next.signed_duration_since(today).num_days()
    }
}

impl std::fmt::Display for Birthday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn anniversary_in(birth: NaiveDate, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birth.month(), birth.day()) {
        Some(date) => date,
        // Only reachable for Feb 29 in a non-leap year.
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(birth),
    }
}

/// One contact: an immutable name, an ordered phone sequence (duplicates
/// allowed, insertion order preserved), and an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a fully validated phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone equal to `old` with `new`, returning how many were
    /// replaced. Replacements are appended at the end, so the sequence order
    /// is perturbed. Zero matches is a quiet no-op.
    ///
    /// Legacy guard: a replacement value outside the loose length window is
    /// reported as a missing phone, never as an invalid one.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<usize> {
        if LEGACY_INVERTED_GUARD && !Phone::looks_like_phone(new) {
            return Err(RoloError::PhoneNotFound(new.to_string()));
        }
        // Two-phase: count matches first, then rebuild. Never mutate the
        // sequence while scanning it.
        let matched = self.phones.iter().filter(|p| p.as_str() == old).count();
        if matched == 0 {
            return Ok(0);
        }
        self.phones.retain(|p| p.as_str() != old);
        for _ in 0..matched {
            self.phones.push(Phone::new(new)?);
        }
        Ok(matched)
    }

    /// Remove every phone equal to `old`; errors when none match.
    pub fn remove_phone(&mut self, old: &str) -> Result<()> {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != old);
        if self.phones.len() == before {
            return Err(RoloError::PhoneNotFound(old.to_string()));
        }
        Ok(())
    }

    /// Set (or replace) the birthday, under the legacy inverted guard: the
    /// value commits only when the dot-based component check reports it
    /// *invalid*. A dash-formatted date therefore commits — through the
    /// strict parse — while a dot-formatted in-range date is refused.
    pub fn add_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<()> {
        let range_ok = Birthday::component_check(raw, today);
        let commit = if LEGACY_INVERTED_GUARD {
            !range_ok
        } else {
            range_ok
        };
        if !commit {
            return Err(RoloError::InvalidBirthday(raw.to_string()));
        }
        self.birthday = Some(Birthday::parse(raw, today)?);
        Ok(())
    }

    /// Days until the next birthday, `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }
}
