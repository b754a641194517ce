// src/forms/controller.rs
use crate::forms::draft::{FieldValue, FormDraft};
use crate::forms::error::FormError;
use crate::forms::schema::{FieldSpec, Schema, ValidationResult};
use chrono::NaiveDate;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(FormDraft),
    Rejected(ValidationResult),
}

/// Holds the draft of the one form currently being edited.
/// Edits never validate; validation happens on `submit`.
#[derive(Debug, Clone)]
pub struct FormController {
    schema: &'static Schema,
    draft: FormDraft,
}

impl FormController {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            draft: schema.blank_draft(),
        }
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Set or clear (`None`) fields. Nothing is stored unless every value
    /// names a field of the schema and fits its kind.
    pub fn set_fields<'a, I>(&mut self, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = (&'a str, Option<FieldValue>)>,
    {
        let checked = values
            .into_iter()
            .map(|(name, value)| -> Result<_, FormError> {
                let spec = self.spec(name)?;
                if value.as_ref().is_some_and(|v| !spec.accepts(v)) {
                    return Err(FormError::WrongKind { field: spec.name });
                }
                Ok((spec.name, value))
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        for (name, value) in checked {
            match value {
                Some(value) => self.draft.set(name, value),
                None => self.draft.clear(name),
            }
        }
        Ok(())
    }

    /// Parse raw submitted strings and store them, all or nothing.
    pub fn set_inputs<'a, I>(&mut self, inputs: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let parsed = inputs
            .into_iter()
            .map(|(name, raw)| -> Result<_, FormError> {
                Ok((name, self.spec(name)?.parse_input(raw)?))
            })
            .collect::<Result<Vec<_>, FormError>>()?;
        self.set_fields(parsed)
    }

    /// Validate the draft against the schema. A rejected draft is kept as is.
    pub fn submit(&self, today: NaiveDate) -> Submission {
        let result = self.schema.validate(&self.draft, today);
        if result.is_valid() {
            Submission::Accepted(self.draft.clone())
        } else {
            Submission::Rejected(result)
        }
    }

    pub fn reset(&mut self) {
        self.draft = self.schema.blank_draft();
    }

    fn spec(&self, name: &str) -> Result<&'static FieldSpec, FormError> {
        self.schema
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}
