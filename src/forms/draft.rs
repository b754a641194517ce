// src/forms/draft.rs
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single field's current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    /// Tag of one of the field's choices (e.g. "cash").
    Choice(String),
}

/// Field values being edited in an open dialog.
/// A field that is absent has no date or choice selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field, or "" when unset.
    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.values.get(field) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn choice(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(FieldValue::Choice(tag)) => Some(tag),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, field: &'static str, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub(crate) fn clear(&mut self, field: &str) {
        self.values.remove(field);
    }
}
