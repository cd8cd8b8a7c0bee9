//! Address validation error types.

/// Errors from wallet and contract address normalization.
///
/// A candidate address must start with the literal `0x` prefix and be
/// exactly 42 characters long before checksum normalization is attempted;
/// anything else is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The input does not denote a syntactically valid EVM address.
    ///
    /// Covers too-short, too-long, missing-prefix, and non-hex inputs
    /// uniformly. The offending input is retained for display.
    #[error("invalid address: {input}")]
    InvalidAddress {
        /// The raw string that failed validation
        input: String,
    },
}

impl AddressError {
    /// Create an `InvalidAddress` error from any displayable input.
    pub fn invalid(input: impl Into<String>) -> Self {
        AddressError::InvalidAddress {
            input: input.into(),
        }
    }
}
