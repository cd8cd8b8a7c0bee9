//! Multi-chain EVM balance aggregation.
//!
//! tallyscan polls a configurable set of chains for the native-coin and
//! ERC-20 balances of a wallet list and reports the results as a flat row
//! set with per-row failure isolation: an unreachable chain, a malformed
//! wallet, or a reverting token each degrade to a single error row while
//! everything else proceeds. The row set exports to CSV or, through a
//! pluggable codec, to spreadsheet formats; the reverse path imports
//! wallet addresses from arbitrary tabular files.
//!
//! # Architecture
//!
//! - [`AggregationEngine`] — the (chain × wallet × token) traversal,
//!   parallel across chains, producing [`BalanceRow`]s
//! - [`ChainClient`] — the RPC seam; [`HttpChainClient`] is the
//!   alloy-backed implementation
//! - [`normalize`] — address validation and EIP-55 canonicalization
//! - [`extract_addresses`] / [`merge_wallets`] — bulk import with
//!   canonical-form de-duplication
//! - [`to_csv`] / [`to_spreadsheet`] — fixed-precision export
//! - [`RefreshScheduler`] — non-overlapping periodic re-invocation
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use tallyscan::{AggregationEngine, ChainConfig, HttpChainClient, TokenConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = AggregationEngine::new(HttpChainClient::new());
//!
//! let chains = vec![ChainConfig::new("eth", "https://eth.llamarpc.com", "ETH")];
//! let wallets = vec!["0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string()];
//! let mut tokens = HashMap::new();
//! tokens.insert(
//!     "eth".to_string(),
//!     vec![TokenConfig::new("eth", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
//!         .with_symbol("USDC")
//!         .with_decimals(6)],
//! );
//!
//! let rows = engine.run(&chains, &wallets, &tokens).await?;
//! let csv_bytes = tallyscan::to_csv(&rows)?;
//! # Ok(())
//! # }
//! ```

mod address;
mod client;
mod codec;
mod config_types;
mod engine;
mod errors;
mod export;
mod format;
mod import;
pub mod provider;
mod scheduler;
mod types;

pub use address::{checksummed, normalize, ADDRESS_LEN};
pub use client::{ChainClient, HttpChainClient};
pub use codec::{CodecError, CsvCodec, TabularCodec, TabularData};
pub use config_types::{ChainConfig, TokenConfig};
pub use engine::{AggregationEngine, NATIVE_DECIMALS};
pub use errors::{
    AddressError, EngineError, ExportError, ImportError, RpcError, TallyscanError,
};
pub use export::{
    export_filename, export_filename_at, to_csv, to_grid, to_spreadsheet, EXPORT_HEADER,
};
pub use format::{format_balance, scale_raw_amount, DISPLAY_DIGITS, PLACEHOLDER};
pub use import::{extract_addresses, import_addresses, merge_wallets};
pub use scheduler::RefreshScheduler;
pub use types::{AssetRef, BalanceRow, RowError, TokenDecimals};
