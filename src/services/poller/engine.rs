use std::time::{Duration, Instant};
use tokio::sync::watch;

use crate::services::lyf::LyfClient;
use crate::services::metrics::collectors::KittyMetricsCollector;

/// Outcome counts of a poll loop run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub successes: u64,
    pub failures: u64,
}

/// Periodically fetches the kitty and republishes it as gauges
pub struct PollerEngine {
    client: LyfClient,
    collector: KittyMetricsCollector,
    url: String,
    delay: Duration,
}

impl PollerEngine {
    pub fn new(
        client: LyfClient,
        collector: KittyMetricsCollector,
        url: String,
        delay: Duration,
    ) -> Self {
        Self {
            client,
            collector,
            url,
            delay,
        }
    }

    /// Run until `shutdown` changes (or its sender goes away).
    /// The first fetch fires immediately, then one every `delay`. Failed
    /// fetches are logged and publish nothing.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> PollSummary {
        let mut summary = PollSummary::default();
        let mut next = Duration::ZERO;

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                _ = tokio::time::sleep(next) => {}
            }
            next = self.delay;

            let started = Instant::now();
            match self.client.fetch_kitty(&self.url).await {
                Ok(response) => {
                    // a closed channel counts as a change
                    if shutdown.has_changed().unwrap_or(true) || *shutdown.borrow() {
                        tracing::debug!("Shutdown requested during fetch, discarding result");
                        break;
                    }
                    self.collector.publish(&response);
                    summary.successes += 1;
                    tracing::debug!(
                        id = %response.kitty.id,
                        contributions = response.kitty.contributions_counter,
                        total_collected = response.kitty.total_collected_amount,
                        elapsed_secs = started.elapsed().as_secs_f64(),
                        "Published kitty metrics"
                    );
                }
                Err(e) => {
                    summary.failures += 1;
                    tracing::error!(error = %e, url = %self.url, "Failed to get data");
                }
            }
        }

        tracing::info!(
            successes = summary.successes,
            failures = summary.failures,
            "Poller stopped"
        );
        summary
    }
}
