//! Configuration types supplied by the embedding application.
//!
//! These are read-only inputs to the aggregation engine: the set of chains
//! to poll and the per-chain token lists. Ownership stays with the caller
//! (typically a settings UI); the engine reads them once per pass and
//! never mutates them.

use serde::{Deserialize, Serialize};

/// One blockchain network to poll.
///
/// A chain with an empty `id` or `endpoint` is treated as not-yet-filled-in
/// configuration and skipped entirely during a pass, without producing an
/// error row.
///
/// # Examples
///
/// ```
/// use tallyscan::ChainConfig;
///
/// let chain = ChainConfig::new("eth", "https://eth.llamarpc.com", "ETH");
/// assert!(chain.is_configured());
///
/// let blank = ChainConfig::new("", "", "ETH");
/// assert!(!blank.is_configured());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// User-chosen unique identifier for this chain
    pub id: String,
    /// RPC endpoint URL
    pub endpoint: String,
    /// Ticker symbol of the chain's base currency (e.g. "ETH", "BNB")
    pub native_symbol: String,
}

impl ChainConfig {
    /// Create a new chain configuration.
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        native_symbol: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            native_symbol: native_symbol.into(),
        }
    }

    /// Whether this entry carries enough information to be polled.
    pub fn is_configured(&self) -> bool {
        !self.id.is_empty() && !self.endpoint.is_empty()
    }
}

/// One token contract to query on a chain.
///
/// The overrides let users pin metadata for contracts whose `decimals()` or
/// `symbol()` views are unreliable or reverting; when absent, the engine
/// queries the contract and falls back to defaults on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Id of the [`ChainConfig`] this token belongs to
    pub chain_id: String,
    /// Token contract address as entered by the user
    pub contract_address: String,
    /// Pinned ticker symbol; `None` means query the contract
    pub symbol_override: Option<String>,
    /// Pinned decimal count; `None` means query the contract
    pub decimals_override: Option<u8>,
}

impl TokenConfig {
    /// Create a token entry with no metadata overrides.
    pub fn new(chain_id: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            contract_address: contract_address.into(),
            symbol_override: None,
            decimals_override: None,
        }
    }

    /// Pin the ticker symbol instead of querying the contract.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_override = Some(symbol.into());
        self
    }

    /// Pin the decimal count instead of querying the contract.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals_override = Some(decimals);
        self
    }
}
