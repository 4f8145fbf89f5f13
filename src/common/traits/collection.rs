//! Standardized collection traits
//!
//! This module defines the interface of a per-category row collection. The
//! record store implements it; the session and exporter only depend on the
//! trait.

use crate::error::Result;
use crate::models::{Row, RowId, StoredRow};
use crate::schema::Category;

/// Core trait for per-category row collections
///
/// Rows are kept in insertion order, which is also display order and the order
/// positional indices refer to.
pub trait CategoryCollection: std::fmt::Debug {
    /// Append a row at the end of the category's sequence
    ///
    /// The row must have been built for `category`.
    fn append(&mut self, category: Category, row: Row) -> Result<RowId>;

    /// Remove the row at `index`, shifting later rows down
    ///
    /// Out-of-range indices leave the collection unchanged.
    fn remove(&mut self, category: Category, index: usize) -> Option<Row>;

    /// Remove the row stored under `id`
    fn remove_by_id(&mut self, id: RowId) -> Option<Row>;

    /// Rows of a category in insertion order
    fn rows(&self, category: Category) -> &[StoredRow];

    /// Drop every row of every category
    fn clear(&mut self);

    /// Append a row to its own category
    fn push(&mut self, row: Row) -> Result<RowId> {
        self.append(row.category(), row)
    }

    /// Number of rows in a category
    fn len(&self, category: Category) -> usize {
        self.rows(category).len()
    }

    /// Row at a position within a category
    fn get(&self, category: Category, index: usize) -> Option<&Row> {
        self.rows(category).get(index).map(|stored| &stored.row)
    }

    /// Total number of rows across all categories
    fn total_rows(&self) -> usize {
        Category::ALL.iter().map(|category| self.len(*category)).sum()
    }

    /// Whether no category holds any rows
    fn is_empty(&self) -> bool {
        self.total_rows() == 0
    }

    /// Categories with at least one row, in catalog order
    fn non_empty_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.len(*category) > 0)
            .collect()
    }

    /// Append multiple rows to their own categories
    fn push_all(&mut self, rows: Vec<Row>) -> Result<Vec<RowId>> {
        rows.into_iter().map(|row| self.push(row)).collect()
    }
}
