//! Entry form drafts
//!
//! A draft holds the values of one category's form while the user fills it in.
//! Values are checked as they are set, the same way a choice box cannot hold a
//! value outside its list.

use crate::error::{EntryError, Result};
use crate::models::Row;
use crate::schema::{Category, INDIVIDUAL_ID};

/// Form values for one category, in declared field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDraft {
    category: Category,
    values: Vec<String>,
}

impl RowDraft {
    /// Empty form with each field at its default value
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            values: category
                .fields()
                .iter()
                .map(|field| field.kind.default_value().to_string())
                .collect(),
        }
    }

    /// Category the form is for
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Whether the user may edit a field
    ///
    /// The individual identifier of non-Individual forms is filled in by the
    /// session and shown read-only.
    #[must_use]
    pub fn is_editable(&self, field: &str) -> bool {
        !(field == INDIVIDUAL_ID && self.category.carries_individual_id())
    }

    /// Set a field value
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let idx = self
            .category
            .field_index(field)
            .ok_or_else(|| EntryError::UnknownField {
                category: self.category.label(),
                field: field.to_string(),
            })?;
        let spec = &self.category.fields()[idx];
        let value = value.into();

        if !self.is_editable(field) {
            return Err(EntryError::InvalidValue {
                category: self.category.label(),
                field: spec.name,
                value,
                reason: "filled in from the current individual",
            });
        }

        spec.kind.validate(&value).map_err(|reason| match spec.kind.choices() {
            Some(choices) => EntryError::InvalidChoice {
                category: self.category.label(),
                field: spec.name,
                value: value.clone(),
                choices: choices.join(", "),
            },
            None => EntryError::InvalidValue {
                category: self.category.label(),
                field: spec.name,
                value: value.clone(),
                reason,
            },
        })?;

        self.values[idx] = value;
        Ok(())
    }

    /// Builder-style [`RowDraft::set`]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Current value of a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.category
            .field_index(field)
            .map(|idx| self.values[idx].as_str())
    }

    /// Field/value pairs in declared field order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.category
            .field_names()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Overwrite the individual identifier, bypassing the read-only check
    pub(crate) fn with_individual(mut self, id: &str) -> Self {
        if let Some(idx) = self.category.field_index(INDIVIDUAL_ID) {
            self.values[idx] = id.to_string();
        }
        self
    }

    /// Turn the filled form into a row
    pub fn build(self) -> Result<Row> {
        Row::from_values(self.category, self.values)
    }
}
