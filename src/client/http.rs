//! Alloy-backed chain client implementation.

use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use async_trait::async_trait;
use tracing::debug;

use crate::client::erc20::Erc20;
use crate::client::ChainClient;
use crate::errors::RpcError;
use crate::provider::ProviderPool;

/// [`ChainClient`] implementation backed by alloy HTTP providers.
///
/// Providers are pooled per endpoint URL, so consecutive aggregation
/// passes over the same chain configuration reuse connections. The probe
/// is a single `eth_blockNumber` call, the cheapest request that proves
/// the endpoint answers JSON-RPC at all.
#[derive(Debug, Default)]
pub struct HttpChainClient {
    pool: ProviderPool,
}

impl HttpChainClient {
    /// Create a client with an empty provider pool.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn probe(&self, endpoint: &str) -> Result<(), RpcError> {
        let provider = self.pool.get_or_create(endpoint)?;
        let block = provider
            .get_block_number()
            .await
            .map_err(|e| RpcError::connect(endpoint, e))?;
        debug!(endpoint, block, "Endpoint probe succeeded");
        Ok(())
    }

    async fn native_balance(&self, endpoint: &str, address: Address) -> Result<U256, RpcError> {
        let provider = self.pool.get_or_create(endpoint)?;
        provider
            .get_balance(address)
            .await
            .map_err(|e| RpcError::native_balance(address, e))
    }

    async fn token_decimals(&self, endpoint: &str, contract: Address) -> Result<u8, RpcError> {
        let provider = self.pool.get_or_create(endpoint)?;
        let token = Erc20::new(contract, provider);
        token
            .decimals()
            .call()
            .await
            .map_err(|e| RpcError::token_metadata("decimals", contract, e))
    }

    async fn token_symbol(&self, endpoint: &str, contract: Address) -> Result<String, RpcError> {
        let provider = self.pool.get_or_create(endpoint)?;
        let token = Erc20::new(contract, provider);
        token
            .symbol()
            .call()
            .await
            .map_err(|e| RpcError::token_metadata("symbol", contract, e))
    }

    async fn token_balance(
        &self,
        endpoint: &str,
        contract: Address,
        holder: Address,
    ) -> Result<U256, RpcError> {
        let provider = self.pool.get_or_create(endpoint)?;
        let token = Erc20::new(contract, provider);
        token
            .balanceOf(holder)
            .call()
            .await
            .map_err(|e| RpcError::token_balance(contract, holder, e))
    }
}
