// src/dates.rs
use chrono::{Days, Local, NaiveDate};

/// Wire format used by `<input type="date">`.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for validation.
/// Tests pin the date so past-date rules stay deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Parse a date coming from a form field.
pub fn parse_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_FORMAT).ok()
}

/// Format a date for an input's `value`/`min` attribute.
pub fn to_input(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Long display form, e.g. "October 19, 2026".
pub fn display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Earliest check-out allowed for a given check-in.
pub fn earliest_check_out(check_in: NaiveDate) -> NaiveDate {
    check_in.checked_add_days(Days::new(1)).unwrap_or(check_in)
}
