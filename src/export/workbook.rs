//! Spreadsheet serialization of export tables
//!
//! One worksheet per table: a bold header row followed by the data rows, all
//! written as strings.

use arrow::array::{Array, AsArray};
use arrow::record_batch::RecordBatch;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;

/// Write named tables as the sheets of one XLSX workbook
pub fn write_workbook(sheets: &[(String, RecordBatch)]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for (name, batch) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name.as_str())?;

        let schema = batch.schema();
        for (col, field) in schema.fields().iter().enumerate() {
            worksheet.write_string_with_format(0, column_number(col), field.name(), &header)?;
        }

        for (col, column) in batch.columns().iter().enumerate() {
            let values = column.as_string::<i32>();
            for row in 0..values.len() {
                if values.is_null(row) {
                    continue;
                }
                worksheet.write_string(row_number(row + 1), column_number(col), values.value(row))?;
            }
        }

        log::debug!("Wrote sheet {name} with {} rows", batch.num_rows());
    }

    Ok(workbook.save_to_buffer()?)
}

// Out-of-range positions saturate so the writer reports its own limit error
fn row_number(idx: usize) -> u32 {
    u32::try_from(idx).unwrap_or(u32::MAX)
}

fn column_number(idx: usize) -> u16 {
    u16::try_from(idx).unwrap_or(u16::MAX)
}
