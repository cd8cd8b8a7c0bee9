//! Strong types for aggregation results
//!
//! This module provides the engine's output unit ([`BalanceRow`]), the
//! per-row failure taxonomy ([`RowError`]), and supporting value types.

mod decimals;
mod row;

pub use decimals::TokenDecimals;
pub use row::{AssetRef, BalanceRow, RowError};
