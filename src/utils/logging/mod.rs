//! Logging utilities
//!
//! Consistent log lines for operations that touch files or the whole store.

pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_operation_complete, log_operation_start, log_warning};
