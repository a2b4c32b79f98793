//! Error types for record loading and enrichment

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, enriching or writing component records
#[derive(Debug, Error, Diagnostic)]
pub enum EnrichError {
    /// A record lacks a field the rules cannot do without
    #[error("record {index}: missing required field '{field}'")]
    #[diagnostic(
        code(xenrich::record::missing_field),
        help("every component record needs a '{field}' (capacitor, resistor, inductor, ...)")
    )]
    MissingRequiredField { index: usize, field: &'static str },

    /// The input is not an array of objects, or a field has the wrong type
    #[error("malformed input: {message}")]
    #[diagnostic(code(xenrich::input::malformed))]
    MalformedInput { message: String },

    #[error("failed to access {}", .path.display())]
    #[diagnostic(code(xenrich::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(xenrich::json))]
    Json(#[from] serde_json::Error),
}

impl EnrichError {
    pub fn malformed(message: impl Into<String>) -> Self {
        EnrichError::MalformedInput {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnrichError::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the batch position to an error raised for a single record
    pub fn at_index(self, index: usize) -> Self {
        match self {
            EnrichError::MissingRequiredField { field, .. } => {
                EnrichError::MissingRequiredField { index, field }
            }
            EnrichError::MalformedInput { message } => EnrichError::MalformedInput {
                message: format!("record {}: {}", index, message),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_index_rewrites_missing_field() {
        let err = EnrichError::MissingRequiredField {
            index: 0,
            field: "part_type",
        }
        .at_index(7);
        assert_eq!(err.to_string(), "record 7: missing required field 'part_type'");
    }

    #[test]
    fn test_at_index_prefixes_malformed_message() {
        let err = EnrichError::malformed("lead_diameter_mm must be a number").at_index(3);
        assert_eq!(
            err.to_string(),
            "malformed input: record 3: lead_diameter_mm must be a number"
        );
    }
}
