//! Shared RPC error types for chain client operations.
//!
//! These errors capture the failure modes of talking to a chain endpoint:
//! connectivity, native balance reads, and ERC-20 metadata/balance reads.
//! Each carries enough context (endpoint, contract, holder) to be useful
//! in logs without consulting the call site.

use alloy_primitives::Address;

/// Errors that can occur during blockchain RPC operations.
///
/// Every variant except [`RpcError::ProviderUrlInvalid`] wraps the
/// underlying provider error as a `source`, so the full chain of causes
/// is preserved for logging.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The configured endpoint string is not a valid URL.
    #[error("invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// The liveness probe against an endpoint failed.
    ///
    /// This is a chain-level failure: when it occurs during an aggregation
    /// pass, the whole chain is reported as unreachable and no per-wallet
    /// work is attempted for it.
    #[error("failed to connect to {endpoint}")]
    Connect {
        /// The endpoint that could not be reached
        endpoint: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading the native-coin balance of an address failed.
    #[error("failed to fetch native balance for {address}")]
    NativeBalance {
        /// The holder whose balance was requested
        address: Address,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading token metadata (`decimals` or `symbol`) failed.
    ///
    /// The aggregation engine degrades this to a default rather than
    /// failing the row, but the error is still surfaced here so callers
    /// that query metadata directly can handle it.
    #[error("failed to fetch token {what} for {contract}")]
    TokenMetadata {
        /// Which metadata field was requested ("decimals" or "symbol")
        what: &'static str,
        /// The token contract queried
        contract: Address,
        /// The underlying contract-call error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading an ERC-20 balance failed.
    #[error("failed to fetch token balance of {holder} on {contract}")]
    TokenBalance {
        /// The token contract queried
        contract: Address,
        /// The holder whose balance was requested
        holder: Address,
        /// The underlying contract-call error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RpcError {
    /// Helper to create a `Connect` error from any error type.
    pub fn connect(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::Connect {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `NativeBalance` error from any error type.
    pub fn native_balance(
        address: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::NativeBalance {
            address,
            source: Box::new(source),
        }
    }

    /// Helper to create a `TokenMetadata` error from any error type.
    pub fn token_metadata(
        what: &'static str,
        contract: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::TokenMetadata {
            what,
            contract,
            source: Box::new(source),
        }
    }

    /// Helper to create a `TokenBalance` error from any error type.
    pub fn token_balance(
        contract: Address,
        holder: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::TokenBalance {
            contract,
            holder,
            source: Box::new(source),
        }
    }
}
