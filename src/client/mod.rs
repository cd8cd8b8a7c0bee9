//! Chain client abstraction.
//!
//! The aggregation engine talks to networks exclusively through the
//! [`ChainClient`] trait: one liveness probe plus the four read queries it
//! needs per (wallet, token) unit. The production implementation is
//! [`HttpChainClient`]; tests substitute a scripted mock.

mod erc20;
mod http;

pub use http::HttpChainClient;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::errors::RpcError;

/// Read-only access to one or more chain endpoints.
///
/// Every method takes the endpoint URL explicitly: a client instance may
/// serve many chains, and which endpoint backs a call is decided by the
/// chain configuration, not by client identity. Each call is one-shot;
/// retry policy, if any, belongs to the caller re-running a whole pass.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Verify the endpoint answers JSON-RPC at all.
    ///
    /// Run once per chain per pass; a failure marks the whole chain
    /// unreachable for that pass.
    async fn probe(&self, endpoint: &str) -> Result<(), RpcError>;

    /// Native-coin balance of `address`, in the chain's smallest unit.
    async fn native_balance(&self, endpoint: &str, address: Address) -> Result<U256, RpcError>;

    /// The token contract's `decimals()` view.
    async fn token_decimals(&self, endpoint: &str, contract: Address) -> Result<u8, RpcError>;

    /// The token contract's `symbol()` view.
    async fn token_symbol(&self, endpoint: &str, contract: Address) -> Result<String, RpcError>;

    /// ERC-20 balance of `holder` on `contract`, in the token's smallest
    /// unit.
    async fn token_balance(
        &self,
        endpoint: &str,
        contract: Address,
        holder: Address,
    ) -> Result<U256, RpcError>;
}
