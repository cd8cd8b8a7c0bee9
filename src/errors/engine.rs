//! Aggregation engine error types.

/// Errors from driving an aggregation pass.
///
/// Note that per-unit failures (unreachable chains, malformed wallets,
/// failed balance reads) never surface here: they are captured as data in
/// [`BalanceRow::error`](crate::BalanceRow) and the pass keeps going. This
/// type only covers conditions that prevent a pass from starting at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Another aggregation pass is already in flight on this engine.
    ///
    /// Two concurrent passes over the same wallet list would interleave
    /// rows from different snapshots, so a second `run` is rejected
    /// rather than queued. The caller (typically a refresh timer) drops
    /// the tick and tries again later.
    #[error("an aggregation pass is already in flight")]
    PassInFlight,
}
