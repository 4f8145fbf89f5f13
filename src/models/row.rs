//! Row entity model
//!
//! A row is one user-entered record of a category. Values are held in the
//! category's declared field order, so every row carries exactly the declared
//! field set.

use std::fmt;

use crate::error::{EntryError, Result};
use crate::schema::{Category, FieldKind, INDIVIDUAL_ID};

/// Stable identifier assigned to a row when it is appended to a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One record of a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    category: Category,
    values: Vec<String>,
}

impl Row {
    /// Build a row from field/value pairs
    ///
    /// The pairs must name exactly the category's declared fields. Enumerated
    /// and typed fields are checked against their kind. A field named twice
    /// keeps its last value.
    pub fn from_pairs<I, K, V>(category: Category, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let fields = category.fields();
        let mut values: Vec<Option<String>> = vec![None; fields.len()];

        for (name, value) in pairs {
            let name = name.as_ref();
            let idx = category
                .field_index(name)
                .ok_or_else(|| EntryError::UnknownField {
                    category: category.label(),
                    field: name.to_string(),
                })?;
            values[idx] = Some(value.into());
        }

        let values = fields
            .iter()
            .zip(values)
            .map(|(field, value)| {
                let value = value.ok_or(EntryError::MissingField {
                    category: category.label(),
                    field: field.name,
                })?;
                check_value(category, field.name, field.kind, &value)?;
                Ok(value)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { category, values })
    }

    /// Build a row from values given in declared field order
    pub fn from_values<V: Into<String>>(
        category: Category,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        let mut values = values.into_iter().map(Into::<String>::into);
        let pairs = category
            .field_names()
            .map(|name| (name, values.next()))
            .collect::<Vec<_>>();

        if let Some(field) = pairs.iter().find(|(_, value)| value.is_none()) {
            return Err(EntryError::MissingField {
                category: category.label(),
                field: field.0,
            });
        }
        if values.next().is_some() {
            return Err(EntryError::UnknownField {
                category: category.label(),
                field: format!("<value beyond {} declared fields>", category.fields().len()),
            });
        }

        Self::from_pairs(
            category,
            pairs
                .into_iter()
                .map(|(name, value)| (name, value.unwrap_or_default())),
        )
    }

    /// Category this row belongs to
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Value of a field, `None` if the category does not declare it
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.category
            .field_index(field)
            .map(|idx| self.values[idx].as_str())
    }

    /// Values in declared field order
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Field/value pairs in declared field order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.category
            .field_names()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Identifier of the individual this row describes
    #[must_use]
    pub fn individual_id(&self) -> Option<&str> {
        self.get(INDIVIDUAL_ID)
    }
}

fn check_value(category: Category, field: &'static str, kind: FieldKind, value: &str) -> Result<()> {
    kind.validate(value).map_err(|reason| match kind {
        FieldKind::Choice(choices) => EntryError::InvalidChoice {
            category: category.label(),
            field,
            value: value.to_string(),
            choices: choices.join(", "),
        },
        _ => EntryError::InvalidValue {
            category: category.label(),
            field,
            value: value.to_string(),
            reason,
        },
    })
}

/// A row together with the identifier it was stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    /// Identifier assigned at append time
    pub id: RowId,
    /// The row itself
    pub row: Row,
}
