//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// Represents the number of decimal places for a token. Most ERC-20 tokens
/// use 18 decimals (like ETH), but stablecoins and wrapped assets often
/// differ (USDC uses 6, WBTC uses 8).
///
/// During a pass the engine resolves each token's precision in order:
/// a user-supplied override, then the contract's `decimals()` view, then
/// [`TokenDecimals::STANDARD`] when the query fails.
///
/// # Examples
///
/// ```
/// use tallyscan::TokenDecimals;
///
/// assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
/// assert_eq!(TokenDecimals::resolve(Some(6), || None).as_u8(), 6);
/// assert_eq!(TokenDecimals::resolve(None, || None).as_u8(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18), also the fallback when
    /// a contract's `decimals()` query fails
    pub const STANDARD: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Resolve a token's precision: override first, then the queried
    /// value, then the standard default.
    ///
    /// `query` is only invoked when no override is present, matching the
    /// engine's contract that pinned metadata skips the RPC round trip.
    pub fn resolve(override_value: Option<u8>, query: impl FnOnce() -> Option<u8>) -> Self {
        match override_value.or_else(query) {
            Some(decimals) => Self(decimals),
            None => Self::STANDARD,
        }
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_override() {
        let resolved = TokenDecimals::resolve(Some(6), || {
            panic!("query must not run when an override is present")
        });
        assert_eq!(resolved.as_u8(), 6);
    }

    #[test]
    fn test_resolve_falls_back_to_query() {
        assert_eq!(TokenDecimals::resolve(None, || Some(8)).as_u8(), 8);
    }

    #[test]
    fn test_resolve_defaults_to_standard() {
        assert_eq!(TokenDecimals::resolve(None, || None), TokenDecimals::STANDARD);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::new(6)), "6 decimals");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&TokenDecimals::STANDARD).unwrap();
        assert_eq!(json, "18");
    }
}
