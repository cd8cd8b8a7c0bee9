//! Provider construction and per-endpoint connection reuse.
//!
//! Providers are created with `AnyNetwork` for type erasure, enabling
//! runtime chain selection at the cost of some type safety. The
//! [`ProviderPool`] keeps one provider per endpoint URL so repeated
//! aggregation passes over the same chains reuse connections instead of
//! rebuilding them; this is an optimization, not a contract, and the pool
//! can be dropped and rebuilt at any time.

use std::collections::HashMap;
use std::sync::RwLock;

use alloy_network::AnyNetwork;
use alloy_provider::{ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;

use crate::errors::RpcError;

/// Type-erased HTTP provider usable against any EVM chain.
pub type AnyHttpProvider = RootProvider<AnyNetwork>;

/// Create an HTTP provider for the given endpoint URL.
///
/// Recommended fillers are disabled to return a bare `RootProvider`: this
/// crate only issues read calls, so nonce/gas filling is dead weight.
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(endpoint: &str) -> Result<AnyHttpProvider, RpcError> {
    let url: url::Url = endpoint
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{e}")))?;

    let client = ClientBuilder::default().http(url);

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<AnyNetwork>()
        .connect_client(client))
}

/// Thread-safe pool of providers indexed by endpoint URL.
///
/// `RootProvider` is cheaply cloneable (internally reference-counted), so
/// `get_or_create` hands out clones while the pool retains the canonical
/// instance.
///
/// # Examples
///
/// ```rust,no_run
/// use tallyscan::provider::ProviderPool;
///
/// let pool = ProviderPool::new();
/// let provider = pool.get_or_create("https://eth.llamarpc.com")?;
/// # Ok::<(), tallyscan::RpcError>(())
/// ```
#[derive(Debug, Default)]
pub struct ProviderPool {
    providers: RwLock<HashMap<String, AnyHttpProvider>>,
}

impl ProviderPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the provider for an endpoint, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::ProviderUrlInvalid`] if a provider has to be
    /// created and the endpoint URL is malformed.
    pub fn get_or_create(&self, endpoint: &str) -> Result<AnyHttpProvider, RpcError> {
        if let Some(provider) = self
            .providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(endpoint)
        {
            return Ok(provider.clone());
        }

        let provider = create_http_provider(endpoint)?;
        let mut providers = self
            .providers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // A concurrent caller may have created one in the meantime; keep
        // the first insertion so all clones share a connection.
        Ok(providers
            .entry(endpoint.to_string())
            .or_insert(provider)
            .clone())
    }

    /// Number of distinct endpoints currently pooled.
    pub fn len(&self) -> usize {
        self.providers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the pool holds no providers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
