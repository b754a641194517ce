// src/forms/error.rs
use thiserror::Error;

/// Misuse of a form: bad field names, wrong value kinds, malformed input.
/// These are not shown inline; validation messages live in `ValidationResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {field} does not accept that kind of value")]
    WrongKind { field: &'static str },

    #[error("field {field} has an invalid date: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("no dialog is open")]
    DialogClosed,
}

/// Failure of the side effect run after a draft is accepted.
/// The dialog stays open with its fields so the visitor can resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("We couldn't record your request right now: {0}")]
    NotRecorded(String),
}
