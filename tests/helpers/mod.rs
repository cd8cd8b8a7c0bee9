//! Test helpers for tallyscan integration tests
//!
//! Provides a scripted [`ChainClient`] implementation so engine behavior
//! can be exercised without real blockchain connections.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use tallyscan::{ChainClient, RpcError};

/// Mock ChainClient with per-endpoint and per-contract scripted behavior.
///
/// Everything defaults to healthy-and-zero: probes succeed, unknown
/// holders have zero balances, and failures are opted into per endpoint,
/// wallet, or contract.
///
/// # Example
///
/// ```rust,ignore
/// let client = MockChainClient::new()
///     .with_token(usdc, "USDC", 6)
///     .with_token_balance(usdc, alice, U256::from(100_250_000u64))
///     .failing_balance(wbtc);
/// ```
#[derive(Default)]
pub struct MockChainClient {
    unreachable: HashSet<String>,
    native: HashMap<Address, U256>,
    failing_native: HashSet<Address>,
    decimals: HashMap<Address, u8>,
    symbols: HashMap<Address, String>,
    failing_metadata: HashSet<Address>,
    balances: HashMap<(Address, Address), U256>,
    failing_balances: HashSet<Address>,
    probe_latency: Option<Duration>,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the probe fail for this endpoint.
    pub fn unreachable(mut self, endpoint: impl Into<String>) -> Self {
        self.unreachable.insert(endpoint.into());
        self
    }

    /// Set the native balance (smallest unit) for a holder.
    pub fn with_native_balance(mut self, holder: Address, raw: U256) -> Self {
        self.native.insert(holder, raw);
        self
    }

    /// Make native balance fetches fail for this holder.
    pub fn failing_native(mut self, holder: Address) -> Self {
        self.failing_native.insert(holder);
        self
    }

    /// Register a token contract's metadata.
    pub fn with_token(mut self, contract: Address, symbol: &str, decimals: u8) -> Self {
        self.symbols.insert(contract, symbol.to_string());
        self.decimals.insert(contract, decimals);
        self
    }

    /// Make `decimals()` and `symbol()` queries fail for this contract.
    pub fn failing_metadata(mut self, contract: Address) -> Self {
        self.failing_metadata.insert(contract);
        self
    }

    /// Set the token balance (smallest unit) for a (contract, holder) pair.
    pub fn with_token_balance(mut self, contract: Address, holder: Address, raw: U256) -> Self {
        self.balances.insert((contract, holder), raw);
        self
    }

    /// Make `balanceOf` fail for this contract.
    pub fn failing_balance(mut self, contract: Address) -> Self {
        self.failing_balances.insert(contract);
        self
    }

    /// Delay every probe, for exercising in-flight pass behavior.
    pub fn with_probe_latency(mut self, latency: Duration) -> Self {
        self.probe_latency = Some(latency);
        self
    }
}

fn failure(detail: &str) -> std::io::Error {
    std::io::Error::other(detail.to_string())
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn probe(&self, endpoint: &str) -> Result<(), RpcError> {
        if let Some(latency) = self.probe_latency {
            tokio::time::sleep(latency).await;
        }
        if self.unreachable.contains(endpoint) {
            return Err(RpcError::connect(endpoint, failure("connection refused")));
        }
        Ok(())
    }

    async fn native_balance(&self, _endpoint: &str, address: Address) -> Result<U256, RpcError> {
        if self.failing_native.contains(&address) {
            return Err(RpcError::native_balance(address, failure("timeout")));
        }
        Ok(self.native.get(&address).copied().unwrap_or(U256::ZERO))
    }

    async fn token_decimals(&self, _endpoint: &str, contract: Address) -> Result<u8, RpcError> {
        if self.failing_metadata.contains(&contract) {
            return Err(RpcError::token_metadata(
                "decimals",
                contract,
                failure("revert"),
            ));
        }
        self.decimals.get(&contract).copied().ok_or_else(|| {
            RpcError::token_metadata("decimals", contract, failure("unknown contract"))
        })
    }

    async fn token_symbol(&self, _endpoint: &str, contract: Address) -> Result<String, RpcError> {
        if self.failing_metadata.contains(&contract) {
            return Err(RpcError::token_metadata(
                "symbol",
                contract,
                failure("revert"),
            ));
        }
        self.symbols.get(&contract).cloned().ok_or_else(|| {
            RpcError::token_metadata("symbol", contract, failure("unknown contract"))
        })
    }

    async fn token_balance(
        &self,
        _endpoint: &str,
        contract: Address,
        holder: Address,
    ) -> Result<U256, RpcError> {
        if self.failing_balances.contains(&contract) {
            return Err(RpcError::token_balance(contract, holder, failure("revert")));
        }
        Ok(self
            .balances
            .get(&(contract, holder))
            .copied()
            .unwrap_or(U256::ZERO))
    }
}
