use std::future::Future;
use tokio::sync::watch;

use crate::services::poller::PollSummary;

/// Runs the metrics server and the poller side by side.
/// Whichever stops first (or an OS signal) broadcasts shutdown to the other.
pub struct Supervisor {
    shutdown_tx: watch::Sender<bool>,
}

impl Supervisor {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { shutdown_tx }
    }

    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Drive `serve` and `poll` until both have finished.
    pub async fn run<S, P, O>(
        &self,
        serve: S,
        poll: P,
        os_signal: O,
    ) -> std::io::Result<PollSummary>
    where
        S: Future<Output = std::io::Result<()>>,
        P: Future<Output = PollSummary>,
        O: Future<Output = ()>,
    {
        tokio::pin!(serve);
        tokio::pin!(poll);
        tokio::pin!(os_signal);

        let (serve_result, summary) = tokio::select! {
            result = &mut serve => {
                match &result {
                    Ok(()) => tracing::warn!("Metrics server exited, stopping poller"),
                    Err(e) => tracing::error!(error = %e, "Metrics server failed, stopping poller"),
                }
                self.shutdown();
                (result, (&mut poll).await)
            }
            summary = &mut poll => {
                tracing::info!("Poller exited, stopping metrics server");
                self.shutdown();
                ((&mut serve).await, summary)
            }
            _ = &mut os_signal => {
                tracing::info!("Signal received, starting graceful shutdown");
                self.shutdown();
                let (result, summary) = tokio::join!(&mut serve, &mut poll);
                (result, summary)
            }
        };

        serve_result.map(|()| summary)
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once `shutdown` is set, or once its sender is gone.
pub async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn os_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
