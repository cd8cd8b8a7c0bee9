//! Address import error types.

/// Errors from bulk address import.
///
/// The two variants are deliberately distinct user-facing conditions:
/// a file that could not be parsed at all, versus a file that parsed fine
/// but contained nothing shaped like an address.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The tabular codec could not parse the input bytes.
    #[error("failed to parse tabular input")]
    Codec {
        /// The underlying codec error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The input parsed successfully but no cell contained a valid address.
    #[error("no valid addresses found in input")]
    NoAddressesFound,
}

impl ImportError {
    /// Helper to create a `Codec` error from any error type.
    pub fn codec(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ImportError::Codec {
            source: source.into(),
        }
    }
}
