//! Balance aggregation engine.
//!
//! One *pass* walks the full (chain × wallet × token) space and produces a
//! flat set of [`BalanceRow`]s. Failures are data, not exceptions: an
//! unreachable chain collapses to a single chain-level row, a malformed
//! wallet to one invalid-address row, a failed fetch to one error row, and
//! nothing ever aborts the rest of the pass.
//!
//! Chains are scanned in parallel (one unreachable chain cannot stall the
//! others), but results are flattened in chain input order and wallets and
//! tokens are visited sequentially within a chain, so the output row order
//! is fully deterministic given deterministic input order.
//!
//! The engine holds no schedule: it is a pure request/response unit. A
//! single-flight guard rejects a second concurrent pass so a periodic
//! caller can never interleave rows from two snapshots; the dropped tick
//! simply fires again later.

use std::collections::HashMap;
use std::error::Error as _;

use alloy_primitives::Address;
use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::address::normalize;
use crate::client::ChainClient;
use crate::config_types::{ChainConfig, TokenConfig};
use crate::errors::{EngineError, RpcError};
use crate::format::scale_raw_amount;
use crate::types::{BalanceRow, TokenDecimals};

/// Fixed exponent for converting a chain's smallest native unit
/// (conventionally wei) to whole coins.
pub const NATIVE_DECIMALS: u8 = 18;

/// How many characters of the contract address stand in for a symbol when
/// the `symbol()` query fails and no override is configured.
const SYMBOL_FALLBACK_LEN: usize = 6;

/// Orchestrates aggregation passes over a [`ChainClient`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::collections::HashMap;
/// use tallyscan::{AggregationEngine, ChainConfig, HttpChainClient, TokenConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let engine = AggregationEngine::new(HttpChainClient::new());
///
/// let chains = vec![ChainConfig::new("eth", "https://eth.llamarpc.com", "ETH")];
/// let wallets = vec!["0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string()];
/// let mut tokens = HashMap::new();
/// tokens.insert(
///     "eth".to_string(),
///     vec![TokenConfig::new("eth", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")],
/// );
///
/// let rows = engine.run(&chains, &wallets, &tokens).await?;
/// for row in &rows {
///     println!("{row:?}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct AggregationEngine<C> {
    client: C,
    pass_guard: Mutex<()>,
}

impl<C: ChainClient> AggregationEngine<C> {
    /// Create an engine over the given chain client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            pass_guard: Mutex::new(()),
        }
    }

    /// Execute one full aggregation pass.
    ///
    /// Chains with an empty id or endpoint are skipped silently, as are
    /// empty wallet strings and tokens with an empty contract address.
    /// Every other unit of work terminates in exactly one row, carrying
    /// either a balance or a [`RowError`](crate::RowError).
    ///
    /// There is no retry inside the pass; each fetch is one-shot. Re-runs
    /// are the caller's responsibility (timer or manual trigger), and each
    /// field may reflect a different block height.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PassInFlight`] if another pass is currently
    /// running on this engine. Network and address failures never surface
    /// here; they become rows.
    pub async fn run(
        &self,
        chains: &[ChainConfig],
        wallets: &[String],
        tokens_by_chain: &HashMap<String, Vec<TokenConfig>>,
    ) -> Result<Vec<BalanceRow>, EngineError> {
        let _pass = self
            .pass_guard
            .try_lock()
            .map_err(|_| EngineError::PassInFlight)?;

        info!(
            chains = chains.len(),
            wallets = wallets.len(),
            "Starting aggregation pass"
        );

        let scans = chains
            .iter()
            .filter(|chain| chain.is_configured())
            .map(|chain| {
                let tokens = tokens_by_chain
                    .get(&chain.id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                self.scan_chain(chain, wallets, tokens)
            });

        // join_all preserves input order, so flattening keeps rows grouped
        // by chain in configuration order regardless of completion timing.
        let rows: Vec<BalanceRow> = join_all(scans).await.into_iter().flatten().collect();

        info!(rows = rows.len(), "Aggregation pass complete");
        Ok(rows)
    }

    /// Scan one chain: probe once, then walk wallets and tokens in order.
    async fn scan_chain(
        &self,
        chain: &ChainConfig,
        wallets: &[String],
        tokens: &[TokenConfig],
    ) -> Vec<BalanceRow> {
        if let Err(e) = self.client.probe(&chain.endpoint).await {
            warn!(chain = %chain.id, error = %e, "Chain unreachable, skipping per-wallet scan");
            return vec![BalanceRow::chain_unreachable(&chain.id, error_detail(&e))];
        }

        let mut rows = Vec::new();
        for raw_wallet in wallets {
            if raw_wallet.trim().is_empty() {
                continue;
            }

            let wallet = match normalize(raw_wallet) {
                Ok(address) => address,
                Err(_) => {
                    debug!(chain = %chain.id, wallet = raw_wallet, "Rejecting malformed wallet");
                    rows.push(BalanceRow::invalid_wallet(
                        &chain.id,
                        raw_wallet,
                        &chain.native_symbol,
                    ));
                    // Malformed input fails the same way for every asset,
                    // so one row stands in for the whole wallet block.
                    continue;
                }
            };
            let wallet_str = wallet.to_string();

            rows.push(self.scan_native(chain, wallet, &wallet_str).await);
            for token in tokens {
                if token.contract_address.trim().is_empty() {
                    continue;
                }
                rows.push(self.scan_token(chain, wallet, &wallet_str, token).await);
            }
        }
        rows
    }

    async fn scan_native(
        &self,
        chain: &ChainConfig,
        wallet: Address,
        wallet_str: &str,
    ) -> BalanceRow {
        match self.client.native_balance(&chain.endpoint, wallet).await {
            Ok(raw) => BalanceRow::native(
                &chain.id,
                wallet_str,
                &chain.native_symbol,
                scale_raw_amount(raw, NATIVE_DECIMALS),
                NATIVE_DECIMALS,
            ),
            Err(e) => {
                warn!(chain = %chain.id, wallet = wallet_str, error = %e, "Native balance fetch failed");
                BalanceRow::native_error(
                    &chain.id,
                    wallet_str,
                    &chain.native_symbol,
                    error_detail(&e),
                )
            }
        }
    }

    async fn scan_token(
        &self,
        chain: &ChainConfig,
        wallet: Address,
        wallet_str: &str,
        token: &TokenConfig,
    ) -> BalanceRow {
        let contract = match normalize(&token.contract_address) {
            Ok(address) => address,
            Err(_) => {
                warn!(chain = %chain.id, contract = token.contract_address, "Malformed token contract address");
                return BalanceRow::token_error(
                    &chain.id,
                    wallet_str,
                    fallback_symbol(&token.contract_address),
                    None,
                    "invalid contract address",
                );
            }
        };

        // Metadata failures degrade to defaults rather than failing the
        // row; only the balance read itself can produce an error row.
        let queried_decimals = match token.decimals_override {
            Some(_) => None,
            None => match self.client.token_decimals(&chain.endpoint, contract).await {
                Ok(decimals) => Some(decimals),
                Err(e) => {
                    warn!(chain = %chain.id, contract = %contract, error = %e, "Decimals query failed, using default");
                    None
                }
            },
        };
        let decimals = TokenDecimals::resolve(token.decimals_override, || queried_decimals);

        let symbol = match &token.symbol_override {
            Some(symbol) => symbol.clone(),
            None => match self.client.token_symbol(&chain.endpoint, contract).await {
                Ok(symbol) => symbol,
                Err(e) => {
                    warn!(chain = %chain.id, contract = %contract, error = %e, "Symbol query failed, using address prefix");
                    fallback_symbol(&token.contract_address)
                }
            },
        };

        match self
            .client
            .token_balance(&chain.endpoint, contract, wallet)
            .await
        {
            Ok(raw) => BalanceRow::token(
                &chain.id,
                wallet_str,
                &symbol,
                contract,
                scale_raw_amount(raw, decimals.as_u8()),
                decimals.as_u8(),
            ),
            Err(e) => {
                warn!(chain = %chain.id, contract = %contract, wallet = wallet_str, error = %e, "Token balance fetch failed");
                BalanceRow::token_error(&chain.id, wallet_str, &symbol, Some(contract), error_detail(&e))
            }
        }
    }
}

/// Best-effort symbol when `symbol()` fails: a recognizable prefix of the
/// contract address as the user entered it.
fn fallback_symbol(contract_address: &str) -> String {
    contract_address.chars().take(SYMBOL_FALLBACK_LEN).collect()
}

/// Extract the most specific detail from an RPC error for row reporting.
///
/// The wrapper message repeats context the row already carries (chain,
/// wallet, contract), so the underlying cause is preferred when present.
fn error_detail(error: &RpcError) -> String {
    match error.source() {
        Some(source) => source.to_string(),
        None => error.to_string(),
    }
}
