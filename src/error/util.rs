//! Utility functions for error handling
//!
//! File system helpers that attach the path and purpose to IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EntryError, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.is_file() {
        return Err(EntryError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a file (needed for: {purpose})", path.display()),
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            io::ErrorKind::InvalidData => "File contains invalid UTF-8 data - cannot read as text",
            _ => "Failed to read file content",
        };
        EntryError::Io(io::Error::new(
            e.kind(),
            format!("{context}: {} (needed for: {purpose})", path.display()),
        ))
    })
}

/// Make sure a directory exists and is a directory, creating it if needed
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(EntryError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{} is not a directory (expected a directory for: {purpose})",
                    path.display()
                ),
            )));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        EntryError::Io(io::Error::new(
            e.kind(),
            format!(
                "Failed to create directory {} for {purpose}: {e}",
                path.display()
            ),
        ))
    })
}
