//! Export of accumulated rows
//!
//! Two output modes are supported:
//! - a single CSV table with every row tagged by its category key
//! - an XLSX workbook with one sheet per non-empty category
//!
//! An empty store produces no artifact at all.

pub mod csv;
pub mod table;
pub mod workbook;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::common::traits::CategoryCollection;
use crate::error::util::ensure_directory;
use crate::error::{EntryError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

pub use table::SECTION_COLUMN;

/// Default stem of exported file names
pub const DEFAULT_FILE_STEM: &str = "phenopacket";

/// Output mode of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One delimited-text table tagged by category
    #[default]
    Csv,
    /// One spreadsheet sheet per category
    #[serde(alias = "excel")]
    Xlsx,
}

impl ExportFormat {
    /// File extension without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// MIME type of the produced file
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            other => Err(EntryError::Config(format!(
                "Unknown export format {other:?} (expected csv or xlsx)"
            ))),
        }
    }
}

/// A serialized export ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested file name, embedding the export date
    pub file_name: String,
    /// Output mode that produced the bytes
    pub format: ExportFormat,
    /// Number of rows exported
    pub rows: usize,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// MIME type of the contents
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the artifact into a directory, creating it if needed
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        ensure_directory(dir, "export")?;
        let path = dir.join(&self.file_name);
        if path.exists() {
            log_warning("Overwriting earlier export", Some(&path));
        }
        std::fs::write(&path, &self.bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No category holds any rows
    NothingToExport,
    /// The serialized export
    Artifact(Artifact),
}

impl ExportOutcome {
    /// The artifact, if one was produced
    #[must_use]
    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            Self::NothingToExport => None,
            Self::Artifact(artifact) => Some(artifact),
        }
    }
}

/// Turns a row collection into an export artifact
#[derive(Debug, Clone)]
pub struct Exporter {
    file_stem: String,
    date: Option<NaiveDate>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_STEM)
    }
}

impl Exporter {
    /// Exporter naming its files `<stem>_<date>.<ext>`
    #[must_use]
    pub fn new(file_stem: impl Into<String>) -> Self {
        Self {
            file_stem: file_stem.into(),
            date: None,
        }
    }

    /// Use a fixed date in file names instead of today's
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// File name for an export made now
    #[must_use]
    pub fn file_name(&self, format: ExportFormat) -> String {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        format!(
            "{}_{}.{}",
            self.file_stem,
            date.format("%Y-%m-%d"),
            format.extension()
        )
    }

    /// Serialize every non-empty category of a collection
    pub fn export<C: CategoryCollection>(
        &self,
        collection: &C,
        format: ExportFormat,
    ) -> Result<ExportOutcome> {
        if collection.is_empty() {
            log::info!("No data to export yet");
            return Ok(ExportOutcome::NothingToExport);
        }

        let start = Instant::now();
        let file_name = self.file_name(format);
        log_operation_start("Exporting", &file_name);

        let bytes = match format {
            ExportFormat::Csv => match table::combined_batch(collection)? {
                Some(batch) => csv::write_csv(&batch)?,
                None => return Ok(ExportOutcome::NothingToExport),
            },
            ExportFormat::Xlsx => workbook::write_workbook(&table::sheet_batches(collection)?)?,
        };

        let rows = collection.total_rows();
        log_operation_complete("exported", &file_name, rows, Some(start.elapsed()));

        Ok(ExportOutcome::Artifact(Artifact {
            file_name,
            format,
            rows,
            bytes,
        }))
    }
}
