//! Error types for the tallyscan library.
//!
//! This module provides strongly-typed errors for all public APIs. It
//! follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   ([`AddressError`], [`RpcError`], [`EngineError`], [`ImportError`],
//!   [`ExportError`])
//! - **Unified error type** ([`TallyscanError`]) for convenience when you
//!   don't need to distinguish between error sources
//!
//! Failures inside an aggregation pass are deliberately *not* errors at
//! this level: the engine captures them as data in
//! [`BalanceRow`](crate::BalanceRow) rows so one bad chain, wallet, or
//! token never aborts the rest of the pass. See
//! [`RowError`](crate::RowError) for that taxonomy.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use tallyscan::{normalize, AddressError};
//!
//! match normalize("0xnot-an-address-at-all-padding-to-42-chars") {
//!     Ok(addr) => println!("canonical: {addr}"),
//!     Err(AddressError::InvalidAddress { input }) => {
//!         eprintln!("rejected: {input}");
//!     }
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use tallyscan::TallyscanError;
//!
//! async fn refresh(engine: &MyEngine) -> Result<(), TallyscanError> {
//!     let rows = engine.run(&chains, &wallets, &tokens).await?;
//!     let bytes = tallyscan::to_csv(&rows)?;
//!     // Errors automatically convert to TallyscanError via From
//!     Ok(())
//! }
//! ```

mod address;
mod engine;
mod export;
mod import;
mod rpc;

pub use address::AddressError;
pub use engine::EngineError;
pub use export::ExportError;
pub use import::ImportError;
pub use rpc::RpcError;

/// Unified error type for all tallyscan operations.
///
/// All module-specific error types automatically convert to
/// `TallyscanError` via `From` implementations, so you can use `?` to
/// propagate errors naturally across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum TallyscanError {
    /// Error from address normalization.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Error from blockchain RPC operations.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from the aggregation engine.
    #[error("Aggregation error: {0}")]
    Engine(#[from] EngineError),

    /// Error from bulk address import.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Error from result export.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
