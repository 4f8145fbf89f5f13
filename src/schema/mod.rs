//! Category catalog
//!
//! Static definitions of the record categories, their ordered field lists and
//! the choice lists of enumerated fields.

pub mod catalog;
pub mod choices;
pub mod field;

pub use catalog::Category;
pub use field::{FieldKind, FieldSpec, INDIVIDUAL_ID, UNSELECTED};
