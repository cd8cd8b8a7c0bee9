//! Result export error types.

/// Errors from serializing a result set to CSV or spreadsheet bytes.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV serialization failed")]
    Csv {
        /// The underlying csv writer error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The external tabular codec failed to serialize the grid.
    #[error("tabular codec serialization failed")]
    Codec {
        /// The underlying codec error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ExportError {
    /// Helper to create a `Csv` error from any error type.
    pub fn csv(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ExportError::Csv {
            source: source.into(),
        }
    }

    /// Helper to create a `Codec` error from any error type.
    pub fn codec(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ExportError::Codec {
            source: source.into(),
        }
    }
}
