// src/forms/schema.rs
use crate::dates;
use crate::forms::draft::{FieldValue, FormDraft};
use crate::forms::error::FormError;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const PAST_DATE: &str = "Date cannot be in the past";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// One selectable option of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub tag: &'static str,
    pub label: &'static str,
}

/// What kind of value a field holds and how it is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    LongText,
    Date,
    Choice(&'static [Choice]),
}

impl FieldKind {
    fn holds_text(self) -> bool {
        !matches!(self, FieldKind::Date | FieldKind::Choice(_))
    }
}

/// Constraint checked when the form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed text must have at least this many characters.
    MinChars(usize),
    Email,
    /// A whole number of at least one.
    Count,
    /// A date no earlier than today. `after` names another date field this one
    /// must fall strictly after, with the message shown when it doesn't.
    Date {
        after: Option<(&'static str, &'static str)>,
    },
    /// Must be one of the kind's choices.
    OneOf,
    Optional,
}

/// Declaration of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rule: Rule,
    /// Shown when the rule fails.
    pub message: &'static str,
    pub placeholder: &'static str,
    pub hint: Option<&'static str>,
}

impl FieldSpec {
    /// Turn a raw submitted string into a typed value.
    /// `Ok(None)` clears the field (no date or choice selected).
    pub fn parse_input(&self, raw: &str) -> Result<Option<FieldValue>, FormError> {
        match self.kind {
            FieldKind::Date => {
                if raw.trim().is_empty() {
                    return Ok(None);
                }
                dates::parse_input(raw)
                    .map(|d| Some(FieldValue::Date(d)))
                    .ok_or_else(|| FormError::InvalidDate {
                        field: self.name,
                        value: raw.to_string(),
                    })
            }
            FieldKind::Choice(_) => {
                let tag = raw.trim();
                if tag.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(FieldValue::Choice(tag.to_string())))
                }
            }
            _ => Ok(Some(FieldValue::Text(raw.to_string()))),
        }
    }

    pub fn accepts(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Text(_) => self.kind.holds_text(),
            FieldValue::Date(_) => self.kind == FieldKind::Date,
            FieldValue::Choice(_) => matches!(self.kind, FieldKind::Choice(_)),
        }
    }

    fn check(&self, draft: &FormDraft, today: NaiveDate) -> Result<(), &'static str> {
        match self.rule {
            Rule::Optional => Ok(()),
            Rule::MinChars(min) => {
                if draft.text(self.name).trim().chars().count() >= min {
                    Ok(())
                } else {
                    Err(self.message)
                }
            }
            Rule::Email => {
                if EMAIL_RE.is_match(draft.text(self.name).trim()) {
                    Ok(())
                } else {
                    Err(self.message)
                }
            }
            Rule::Count => match draft.text(self.name).trim().parse::<u32>() {
                Ok(n) if n >= 1 => Ok(()),
                _ => Err(self.message),
            },
            Rule::OneOf => {
                let FieldKind::Choice(choices) = self.kind else {
                    return Err(self.message);
                };
                match draft.choice(self.name) {
                    Some(tag) if choices.iter().any(|c| c.tag == tag) => Ok(()),
                    _ => Err(self.message),
                }
            }
            Rule::Date { after } => {
                let date = draft.date(self.name).ok_or(self.message)?;
                if date < today {
                    return Err(PAST_DATE);
                }
                if let Some((other, order_message)) = after {
                    if let Some(earlier) = draft.date(other) {
                        if date <= earlier {
                            return Err(order_message);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Per-field outcome of validating a draft. Only failing fields are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<&'static str, &'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.errors.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Fields and constraints of one form.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Draft with every text field empty and nothing selected.
    pub fn blank_draft(&self) -> FormDraft {
        let mut draft = FormDraft::new();
        for field in self.fields.iter().filter(|f| f.kind.holds_text()) {
            draft.set(field.name, FieldValue::Text(String::new()));
        }
        draft
    }

    /// Check every field. Pure: the same draft and day give the same result.
    pub fn validate(&self, draft: &FormDraft, today: NaiveDate) -> ValidationResult {
        let mut result = ValidationResult::default();
        for field in self.fields {
            if let Err(message) = field.check(draft, today) {
                result.errors.insert(field.name, message);
            }
        }
        result
    }
}

const NAME: FieldSpec = FieldSpec {
    name: "name",
    label: "Full Name",
    kind: FieldKind::Text,
    rule: Rule::MinChars(2),
    message: "Name must be at least 2 characters",
    placeholder: "John Doe",
    hint: None,
};

const EMAIL: FieldSpec = FieldSpec {
    name: "email",
    label: "Email",
    kind: FieldKind::Email,
    rule: Rule::Email,
    message: "Please enter a valid email address",
    placeholder: "you@example.com",
    hint: None,
};

const PHONE: FieldSpec = FieldSpec {
    name: "phone",
    label: "Phone",
    kind: FieldKind::Tel,
    rule: Rule::MinChars(10),
    message: "Please enter a valid phone number",
    placeholder: "(123) 456-7890",
    hint: None,
};

pub const FINANCING_CHOICES: &[Choice] = &[
    Choice {
        tag: "mortgage",
        label: "Mortgage",
    },
    Choice {
        tag: "cash",
        label: "Cash Purchase",
    },
    Choice {
        tag: "undecided",
        label: "Not Sure Yet",
    },
];

pub static INQUIRY: Schema = Schema {
    fields: &[
        NAME,
        EMAIL,
        PHONE,
        FieldSpec {
            name: "preferredDate",
            label: "Preferred Viewing Date",
            kind: FieldKind::Date,
            rule: Rule::Date { after: None },
            message: "Please select a preferred viewing date",
            placeholder: "Select a date",
            hint: None,
        },
        FieldSpec {
            name: "budget",
            label: "Your Budget",
            kind: FieldKind::Text,
            rule: Rule::MinChars(1),
            message: "Please enter your budget",
            placeholder: "$300,000",
            hint: None,
        },
        FieldSpec {
            name: "financing",
            label: "Financing Option",
            kind: FieldKind::Choice(FINANCING_CHOICES),
            rule: Rule::OneOf,
            message: "Please select a financing option",
            placeholder: "",
            hint: None,
        },
        FieldSpec {
            name: "additionalInfo",
            label: "Additional Information",
            kind: FieldKind::LongText,
            rule: Rule::Optional,
            message: "",
            placeholder: "Any specific requirements or questions about the property...",
            hint: Some("Optional: Let us know if you have any specific questions or requirements."),
        },
    ],
};

pub static BOOKING: Schema = Schema {
    fields: &[
        NAME,
        EMAIL,
        PHONE,
        FieldSpec {
            name: "checkIn",
            label: "Check-in Date",
            kind: FieldKind::Date,
            rule: Rule::Date { after: None },
            message: "Please select a check-in date",
            placeholder: "Pick a date",
            hint: None,
        },
        FieldSpec {
            name: "checkOut",
            label: "Check-out Date",
            kind: FieldKind::Date,
            rule: Rule::Date {
                after: Some(("checkIn", "Check-out must be after check-in")),
            },
            message: "Please select a check-out date",
            placeholder: "Pick a date",
            hint: None,
        },
        FieldSpec {
            name: "guests",
            label: "Number of Guests",
            kind: FieldKind::Number,
            rule: Rule::Count,
            message: "Please enter number of guests",
            placeholder: "2",
            hint: None,
        },
        FieldSpec {
            name: "specialRequests",
            label: "Special Requests",
            kind: FieldKind::LongText,
            rule: Rule::Optional,
            message: "",
            placeholder: "Any special requests or requirements...",
            hint: None,
        },
    ],
};
