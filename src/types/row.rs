//! Balance result rows and the per-row failure taxonomy.

use alloy_primitives::Address;
use serde::{Serialize, Serializer};

/// What a balance row refers to: the chain's base currency or a token
/// contract.
///
/// Renders as `"native"` or the checksummed contract address, which is
/// also the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRef {
    /// The chain's base currency (not a contract)
    Native,
    /// An ERC-20 token contract
    Token(Address),
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetRef::Native => f.write_str("native"),
            AssetRef::Token(contract) => write!(f, "{contract}"),
        }
    }
}

impl Serialize for AssetRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Closed taxonomy of per-row failures.
///
/// One variant per failure class, carrying the descriptive detail from the
/// underlying cause. Consumers branch on the variant, not on message text;
/// the `Display` form is what lands in the result table and in exports.
///
/// Token metadata failures (`decimals`/`symbol` queries) have no variant
/// here: they degrade to defaults instead of failing the row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The chain's endpoint could not be reached; replaces the whole
    /// per-wallet block for that chain with a single row.
    #[error("RPC connect error: {detail}")]
    Connect {
        /// Description of the connectivity failure
        detail: String,
    },

    /// The wallet string is not a syntactically valid address; suppresses
    /// native and token fetches for that wallet on that chain.
    #[error("invalid address")]
    InvalidAddress,

    /// The native balance read failed; token fetches for the same wallet
    /// still proceed.
    #[error("native error: {detail}")]
    NativeFetch {
        /// Description of the fetch failure
        detail: String,
    },

    /// A token balance read (or the contract address itself) failed;
    /// processing continues with the next token.
    #[error("token error: {detail}")]
    TokenFetch {
        /// Description of the fetch failure
        detail: String,
    },
}

impl Serialize for RowError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One unit of aggregation output: a (chain, wallet, asset) observation.
///
/// Exactly one of `balance` and `error` is populated once a row is
/// terminal; the constructors enforce this. Rows are append-only within a
/// pass, and a full pass replaces the prior result set atomically from the
/// caller's perspective.
///
/// For a healthy (chain, wallet) pair the engine emits 1 native row plus
/// one row per configured token. When a chain's connectivity probe fails,
/// a single chain-level row (with no wallet) stands in for the entire
/// per-wallet block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    /// Id of the chain this row belongs to
    pub chain_id: String,
    /// Wallet the balance belongs to; `None` for chain-level error rows.
    /// Holds the raw user input when normalization failed, the
    /// checksummed form otherwise.
    pub wallet: Option<String>,
    /// Ticker symbol of the asset; `None` for chain-level error rows
    pub asset: Option<String>,
    /// Whether this is the native balance or a token contract
    pub contract: Option<AssetRef>,
    /// Decimal-scaled balance; `None` when the row failed
    pub balance: Option<f64>,
    /// Decimal precision the balance was scaled with
    pub decimals: Option<u8>,
    /// Failure that produced this row; `None` on success
    pub error: Option<RowError>,
}

impl BalanceRow {
    /// Chain-level row: the connectivity probe failed and no per-wallet
    /// work was attempted for this chain.
    pub fn chain_unreachable(chain_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            wallet: None,
            asset: None,
            contract: None,
            balance: None,
            decimals: None,
            error: Some(RowError::Connect {
                detail: detail.into(),
            }),
        }
    }

    /// Row for a wallet string that failed normalization. The raw input is
    /// kept verbatim so the user can see what was rejected.
    pub fn invalid_wallet(
        chain_id: impl Into<String>,
        raw_wallet: impl Into<String>,
        native_symbol: impl Into<String>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            wallet: Some(raw_wallet.into()),
            asset: Some(native_symbol.into()),
            contract: Some(AssetRef::Native),
            balance: None,
            decimals: None,
            error: Some(RowError::InvalidAddress),
        }
    }

    /// Successful native balance row.
    pub fn native(
        chain_id: impl Into<String>,
        wallet: impl Into<String>,
        native_symbol: impl Into<String>,
        balance: f64,
        decimals: u8,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            wallet: Some(wallet.into()),
            asset: Some(native_symbol.into()),
            contract: Some(AssetRef::Native),
            balance: Some(balance),
            decimals: Some(decimals),
            error: None,
        }
    }

    /// Failed native balance row. Does not block token fetches for the
    /// same wallet.
    pub fn native_error(
        chain_id: impl Into<String>,
        wallet: impl Into<String>,
        native_symbol: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            wallet: Some(wallet.into()),
            asset: Some(native_symbol.into()),
            contract: Some(AssetRef::Native),
            balance: None,
            decimals: None,
            error: Some(RowError::NativeFetch {
                detail: detail.into(),
            }),
        }
    }

    /// Successful token balance row.
    pub fn token(
        chain_id: impl Into<String>,
        wallet: impl Into<String>,
        symbol: impl Into<String>,
        contract: Address,
        balance: f64,
        decimals: u8,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            wallet: Some(wallet.into()),
            asset: Some(symbol.into()),
            contract: Some(AssetRef::Token(contract)),
            balance: Some(balance),
            decimals: Some(decimals),
            error: None,
        }
    }

    /// Failed token balance row, with the best-effort symbol that was
    /// resolved before the failure.
    pub fn token_error(
        chain_id: impl Into<String>,
        wallet: impl Into<String>,
        symbol: impl Into<String>,
        contract: Option<Address>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            wallet: Some(wallet.into()),
            asset: Some(symbol.into()),
            contract: contract.map(AssetRef::Token),
            balance: None,
            decimals: None,
            error: Some(RowError::TokenFetch {
                detail: detail.into(),
            }),
        }
    }

    /// Whether this row captured a failure rather than a balance.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
