//! Record store
//!
//! This module provides the in-memory store holding one ordered row sequence
//! per category for the lifetime of a session. Nothing is persisted; the store
//! only leaves memory through an explicit export.

use std::collections::HashMap;

use crate::common::traits::CategoryCollection;
use crate::error::{EntryError, Result};
use crate::models::{Row, RowId, StoredRow};
use crate::schema::Category;

/// In-memory rows of every category for one session
///
/// No uniqueness, referential or cross-category constraint is enforced;
/// duplicate and contradictory rows are accepted.
#[derive(Debug)]
pub struct RecordStore {
    /// Rows by category, in insertion order
    rows: HashMap<Category, Vec<StoredRow>>,
    /// Identifier handed to the next appended row
    next_id: u64,
}

impl RecordStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a store from rows, appended in the given order
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let mut store = Self::new();
        store.push_all(rows)?;
        Ok(store)
    }

    /// Position of a row identifier within its category
    #[must_use]
    pub fn position(&self, id: RowId) -> Option<(Category, usize)> {
        self.rows.iter().find_map(|(category, rows)| {
            rows.iter()
                .position(|stored| stored.id == id)
                .map(|idx| (*category, idx))
        })
    }

    /// Non-empty categories with their rows, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[StoredRow])> {
        Category::ALL.into_iter().filter_map(|category| {
            self.rows
                .get(&category)
                .filter(|rows| !rows.is_empty())
                .map(|rows| (category, rows.as_slice()))
        })
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryCollection for RecordStore {
    fn append(&mut self, category: Category, row: Row) -> Result<RowId> {
        if row.category() != category {
            return Err(EntryError::CategoryMismatch {
                expected: category.label(),
                found: row.category().label(),
            });
        }

        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows
            .entry(category)
            .or_default()
            .push(StoredRow { id, row });

        log::debug!("Appended {id} to {category}");
        Ok(id)
    }

    fn remove(&mut self, category: Category, index: usize) -> Option<Row> {
        let rows = self.rows.get_mut(&category)?;
        if index >= rows.len() {
            log::debug!(
                "Ignoring removal of row {index} from {category} ({} rows)",
                rows.len()
            );
            return None;
        }
        let removed = rows.remove(index);
        log::debug!("Removed {} at index {index} from {category}", removed.id);
        Some(removed.row)
    }

    fn remove_by_id(&mut self, id: RowId) -> Option<Row> {
        let (category, index) = self.position(id)?;
        self.remove(category, index)
    }

    fn rows(&self, category: Category) -> &[StoredRow] {
        self.rows.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
