//! Periodic refresh scheduling.
//!
//! The aggregation engine is a pure request/response unit with no
//! awareness of timing; this module owns the repeating task that invokes
//! it. Ticks never overlap: the tick body is awaited inline before the
//! next interval fires, and missed ticks are skipped rather than queued.
//! The engine's own single-flight guard is a second line of defense if
//! some other caller races a manual refresh against the timer.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// A cancellable repeating task.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use tallyscan::{AggregationEngine, HttpChainClient, RefreshScheduler};
///
/// # async fn example() {
/// let engine = Arc::new(AggregationEngine::new(HttpChainClient::new()));
///
/// let scheduler = RefreshScheduler::spawn(Duration::from_secs(30), move || {
///     let engine = engine.clone();
///     async move {
///         // run a pass; a PassInFlight rejection just drops this tick
///         let _ = engine.run(&[], &[], &Default::default()).await;
///     }
/// });
///
/// // later:
/// scheduler.shutdown().await;
/// # }
/// ```
pub struct RefreshScheduler {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl RefreshScheduler {
    /// Spawn a repeating task with the given period.
    ///
    /// The first tick fires after one full period, not immediately. Each
    /// tick's future is awaited to completion before the next tick is
    /// taken, and intervals missed while a tick runs long are skipped.
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (cancel, mut cancelled) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // consume the immediate first tick so the task starts idle
            timer.tick().await;

            loop {
                tokio::select! {
                    _ = timer.tick() => tick().await,
                    _ = cancelled.changed() => {
                        debug!("Refresh scheduler cancelled");
                        break;
                    }
                }
            }
        });

        Self { handle, cancel }
    }

    /// Stop issuing ticks. A tick already running is not interrupted.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Cancel and wait for the task to wind down.
    pub async fn shutdown(self) {
        self.cancel();
        let _ = self.handle.await;
    }
}
