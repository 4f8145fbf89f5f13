//! A Rust library for entering phenopacket records during a session and
//! exporting them as CSV or a multi-sheet XLSX workbook.

pub mod auth;
pub mod collections;
pub mod common;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod models;
pub mod schema;
pub mod session;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use collections::RecordStore;
pub use common::traits::CategoryCollection;
pub use config::EntryConfig;
pub use error::{EntryError, Result};
pub use models::{Row, RowId, StoredRow};
pub use schema::{Category, FieldKind, FieldSpec};
pub use session::{RowDraft, Session};

// Export
pub use export::{Artifact, ExportFormat, ExportOutcome, Exporter};

// Surfaces
pub use auth::AccessGate;
pub use console::Console;
