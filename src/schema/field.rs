//! Field definitions for the category catalog
//!
//! Every field is stored as text. The kind only decides which values an entry
//! form may submit and how the form prompts for it.

use arrow_schema::{DataType, Field};
use chrono::NaiveTime;
use std::fmt;

/// The empty placeholder meaning "unselected" for enumerated fields
pub const UNSELECTED: &str = "";

/// Name of the field linking a row to its individual
pub const INDIVIDUAL_ID: &str = "IndividualID";

/// Represents the input kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, any string including empty
    Text,
    /// Single choice from a fixed list, or the unselected placeholder
    Choice(&'static [&'static str]),
    /// Non-negative whole number of days
    DayCount,
    /// Time of day on a 24 hour clock
    TimeOfDay,
}

impl FieldKind {
    /// Check a submitted value against this kind
    ///
    /// Returns the reason for rejection. Empty values are always accepted.
    pub fn validate(&self, value: &str) -> Result<(), &'static str> {
        if value == UNSELECTED {
            return Ok(());
        }
        match self {
            Self::Text => Ok(()),
            Self::Choice(choices) => {
                if choices.contains(&value) {
                    Ok(())
                } else {
                    Err("not one of the allowed choices")
                }
            }
            Self::DayCount => value
                .trim()
                .parse::<u64>()
                .map(|_| ())
                .map_err(|_| "expected a non-negative whole number of days"),
            Self::TimeOfDay => {
                let value = value.trim();
                NaiveTime::parse_from_str(value, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
                    .map(|_| ())
                    .map_err(|_| "expected a 24 hour time as HH:MM")
            }
        }
    }

    /// Value a fresh form starts with
    #[must_use]
    pub const fn default_value(&self) -> &'static str {
        match self {
            Self::DayCount => "0",
            Self::TimeOfDay => "00:00",
            Self::Text | Self::Choice(_) => UNSELECTED,
        }
    }

    /// Choice list for enumerated fields
    #[must_use]
    pub const fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Choice(choices) => Some(choices),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Choice(_) => write!(f, "Choice"),
            Self::DayCount => write!(f, "Days"),
            Self::TimeOfDay => write!(f, "Time"),
        }
    }
}

/// A named field within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name used in rows and exports
    pub name: &'static str,
    /// Input kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Free-text field
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    /// Enumerated field
    #[must_use]
    pub const fn choice(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Choice(choices),
        }
    }

    /// Field with a specific kind
    #[must_use]
    pub const fn typed(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Whether the value comes from a fixed list
    #[must_use]
    pub const fn is_enumerated(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Arrow field for export tables
    #[must_use]
    pub fn to_arrow_field(&self, nullable: bool) -> Field {
        Field::new(self.name, DataType::Utf8, nullable)
    }
}
