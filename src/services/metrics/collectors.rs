use std::sync::Arc;

use super::MetricsRegistry;
use crate::modules::kitty::schema::KittyResponse;

/// Publishes decoded kitties into the kitty gauges
pub struct KittyMetricsCollector {
    metrics: Arc<MetricsRegistry>,
}

impl KittyMetricsCollector {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self { metrics }
    }

    /// Overwrite both gauges at the kitty's label tuple.
    pub fn publish(&self, response: &KittyResponse) {
        let kitty = &response.kitty;
        let labels = kitty.label_values();

        self.metrics
            .contributions_counter
            .with_label_values(&labels)
            .set(kitty.contributions_counter as f64);

        self.metrics
            .total_collected_amount
            .with_label_values(&labels)
            .set(kitty.total_collected_amount as f64);
    }
}
