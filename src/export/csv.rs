//! Delimited-text serialization of export tables

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;

use crate::error::Result;

/// Serialize a table as CSV with a header row and no index column
///
/// Null cells are written empty.
pub fn write_csv(batch: &RecordBatch) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().with_header(true).build(Vec::new());
    writer.write(batch)?;
    Ok(writer.into_inner())
}
