//! Entry controller
//!
//! A [`Session`] owns the record store of one user session together with the
//! state the entry forms share: the current individual identifier and the
//! selected row index of each category. One session is created per user and
//! dropped when the user leaves; nothing outlives it except exported files.

pub mod draft;

pub use draft::RowDraft;

use std::collections::HashMap;

use crate::collections::RecordStore;
use crate::common::traits::CategoryCollection;
use crate::error::{EntryError, Result};
use crate::export::{ExportFormat, ExportOutcome, Exporter};
use crate::models::{Row, RowId};
use crate::schema::{Category, INDIVIDUAL_ID};

/// State of one entry session
#[derive(Debug, Default)]
pub struct Session {
    /// Rows entered so far
    store: RecordStore,
    /// Identifier copied into every non-Individual row at submission
    current_individual: String,
    /// Selected row index per category, cleared whenever indices shift
    selection: HashMap<Category, usize>,
}

impl Session {
    /// Start a session with an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows entered so far
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Identifier of the individual new rows are linked to
    #[must_use]
    pub fn current_individual(&self) -> &str {
        &self.current_individual
    }

    /// Change the individual new rows are linked to
    ///
    /// Rows already stored keep the identifier they were created with.
    pub fn set_current_individual(&mut self, id: impl Into<String>) {
        self.current_individual = id.into();
        log::info!("Current individual set to {:?}", self.current_individual);
    }

    /// Fresh form for a category, pre-filled with defaults and the current individual
    #[must_use]
    pub fn draft(&self, category: Category) -> RowDraft {
        RowDraft::new(category).with_individual(&self.current_individual)
    }

    /// Validate a filled form and append it to its category
    ///
    /// Non-Individual rows are stamped with the current individual at this
    /// point. Submitting an Individual row makes its identifier current.
    pub fn submit(&mut self, draft: RowDraft) -> Result<RowId> {
        let category = draft.category();
        let draft = if category.carries_individual_id() {
            draft.with_individual(&self.current_individual)
        } else {
            draft
        };

        let row = draft.build()?;
        if category == Category::Individual {
            let id = row.get(INDIVIDUAL_ID).unwrap_or_default().to_string();
            self.set_current_individual(id);
        }
        self.append(category, row)
    }

    /// Append an already built row to a category
    pub fn append(&mut self, category: Category, row: Row) -> Result<RowId> {
        let id = self.store.append(category, row)?;
        log::info!(
            "Added {id} to {category} ({} rows)",
            self.store.len(category)
        );
        Ok(id)
    }

    /// Select a row of a category for deletion
    ///
    /// Only indices of existing rows can be selected.
    pub fn select(&mut self, category: Category, index: usize) -> Result<()> {
        let len = self.store.len(category);
        if index >= len {
            return Err(EntryError::IndexOutOfRange {
                category: category.label(),
                index,
                len,
            });
        }
        self.selection.insert(category, index);
        Ok(())
    }

    /// Currently selected row index of a category
    #[must_use]
    pub fn selected(&self, category: Category) -> Option<usize> {
        self.selection.get(&category).copied()
    }

    /// Delete the selected row of a category
    ///
    /// Without a selection, or with a selection that no longer points at a
    /// row, nothing happens.
    pub fn delete_selected(&mut self, category: Category) -> Option<Row> {
        let index = self.selected(category)?;
        self.remove(category, index)
    }

    /// Remove the row at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, category: Category, index: usize) -> Option<Row> {
        let removed = self.store.remove(category, index)?;
        self.selection.remove(&category);
        log::info!(
            "Removed row {index} from {category} ({} rows left)",
            self.store.len(category)
        );
        Some(removed)
    }

    /// Remove a row by the identifier it was stored under
    pub fn remove_by_id(&mut self, id: RowId) -> Option<Row> {
        let removed = self.store.remove_by_id(id)?;
        self.selection.remove(&removed.category());
        log::info!("Removed {id} from {}", removed.category());
        Some(removed)
    }

    /// Export everything entered so far
    pub fn export(&self, exporter: &Exporter, format: ExportFormat) -> Result<ExportOutcome> {
        exporter.export(&self.store, format)
    }

    /// Discard all rows and selections, keeping the current individual
    pub fn reset(&mut self) {
        self.store.clear();
        self.selection.clear();
    }
}
