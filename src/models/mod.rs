//! Entity models for entered records

pub mod row;

pub use row::{Row, RowId, StoredRow};
