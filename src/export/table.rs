//! Arrow tables built from stored rows
//!
//! Every column is `Utf8`. Per-category tables are non-nullable; the combined
//! table is nullable so that columns a category does not declare stay empty.

use std::iter;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;

use crate::common::traits::CategoryCollection;
use crate::error::Result;
use crate::models::StoredRow;
use crate::schema::Category;

/// Column holding the category key of each row in the combined table
pub const SECTION_COLUMN: &str = "Section";

/// Arrow schema of one category's table
#[must_use]
pub fn category_schema(category: Category) -> Schema {
    Schema::new(
        category
            .fields()
            .iter()
            .map(|field| field.to_arrow_field(false))
            .collect::<Vec<_>>(),
    )
}

/// Table of one category's rows in insertion order
pub fn category_batch(category: Category, rows: &[StoredRow]) -> Result<RecordBatch> {
    let columns = (0..category.fields().len())
        .map(|idx| {
            let values = rows.iter().map(|stored| stored.row.values()[idx].as_str());
            Arc::new(StringArray::from_iter_values(values)) as ArrayRef
        })
        .collect::<Vec<_>>();

    Ok(RecordBatch::try_new(
        Arc::new(category_schema(category)),
        columns,
    )?)
}

/// Column names of the combined table
///
/// Columns appear in the order they are first met when walking the categories'
/// field lists, each list followed by the section column.
#[must_use]
pub fn combined_columns(categories: &[Category]) -> Vec<&'static str> {
    categories
        .iter()
        .flat_map(|category| category.field_names().chain(iter::once(SECTION_COLUMN)))
        .unique()
        .collect()
}

/// One table holding every non-empty category's rows, tagged by category key
///
/// Returns `None` when the collection holds no rows.
pub fn combined_batch<C: CategoryCollection>(collection: &C) -> Result<Option<RecordBatch>> {
    let categories = collection.non_empty_categories();
    if categories.is_empty() {
        return Ok(None);
    }

    let column_names = combined_columns(&categories);
    let schema = Schema::new(
        column_names
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );

    let columns = column_names
        .iter()
        .map(|name| {
            let values = categories.iter().flat_map(|category| {
                collection.rows(*category).iter().map(move |stored| {
                    if *name == SECTION_COLUMN {
                        Some(category.key())
                    } else {
                        stored.row.get(name)
                    }
                })
            });
            Arc::new(values.collect::<StringArray>()) as ArrayRef
        })
        .collect::<Vec<_>>();

    Ok(Some(RecordBatch::try_new(Arc::new(schema), columns)?))
}

/// One named table per non-empty category, in catalog order
pub fn sheet_batches<C: CategoryCollection>(collection: &C) -> Result<Vec<(String, RecordBatch)>> {
    collection
        .non_empty_categories()
        .into_iter()
        .map(|category| {
            let batch = category_batch(category, collection.rows(category))?;
            Ok((category.sheet_name(), batch))
        })
        .collect()
}
