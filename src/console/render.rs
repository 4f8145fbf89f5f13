//! Console output utilities
//!
//! Plain-text rendering of category tables and the catalog. Rendering only
//! reads the store; it never changes it.

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::models::StoredRow;
use crate::schema::{Category, FieldKind};

/// Print one category's rows as an aligned table with an index column
///
/// The selected row, if any, is marked with `>`.
pub fn render_table<W: Write>(
    out: &mut W,
    category: Category,
    rows: &[StoredRow],
    selected: Option<usize>,
) -> Result<()> {
    writeln!(out, "{} ({} rows)", category.label(), rows.len())?;
    if rows.is_empty() {
        return Ok(());
    }

    let index_header = "#".to_string();
    let header: Vec<String> = std::iter::once(index_header)
        .chain(category.field_names().map(str::to_string))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(idx, stored)| {
            let marker = if selected == Some(idx) { ">" } else { " " };
            std::iter::once(format!("{marker}{idx}"))
                .chain(stored.row.values().iter().cloned())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(body.iter())
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for line in std::iter::once(&header).chain(body.iter()) {
        let cells = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .join(" | ");
        writeln!(out, "{}", cells.trim_end())?;
    }
    Ok(())
}

/// Print every category with its fields and choice lists
pub fn render_catalog<W: Write>(out: &mut W) -> Result<()> {
    for category in Category::ALL {
        writeln!(out, "{} [{}]", category.label(), category.key())?;
        for field in category.fields() {
            match field.kind {
                FieldKind::Choice(choices) => {
                    writeln!(out, "  {}: {}", field.name, choices.join(" / "))?;
                }
                FieldKind::Text => writeln!(out, "  {}", field.name)?,
                kind => writeln!(out, "  {} ({kind})", field.name)?,
            }
        }
    }
    Ok(())
}

/// Print the numbered options of a choice field, `0` meaning unselected
pub fn render_choices<W: Write>(out: &mut W, choices: &[&str]) -> Result<()> {
    writeln!(out, "    0) (unselected)")?;
    for (idx, choice) in choices.iter().enumerate() {
        writeln!(out, "    {}) {choice}", idx + 1)?;
    }
    Ok(())
}
