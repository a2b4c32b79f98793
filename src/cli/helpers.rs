//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use std::path::{Path, PathBuf};

use crate::core::Config;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format a millimetre value with up to two decimals, "-" when unknown
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let s = format!("{:.2}", v);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        None => "-".to_string(),
    }
}

/// Pick the explicit CLI path, falling back to the configured one
pub fn resolve_path(explicit: Option<&Path>, configured: impl FnOnce(&Config) -> PathBuf) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => configured(&Config::load()),
    }
}
