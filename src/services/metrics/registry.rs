use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

const NAMESPACE: &str = "lyf";
const KITTY_LABELS: [&str; 4] = ["OwnerFirstName", "OwnerLastName", "OwnerID", "ID"];

#[derive(Debug, thiserror::Error)]
#[error("{name} not registered: {source}")]
pub struct RegistrationError {
    pub name: &'static str,
    #[source]
    pub source: prometheus::Error,
}

/// Kitty gauges and the registry they are exposed from.
/// Owned by the application and shared with the scrape handler; nothing is
/// registered process-wide.
pub struct MetricsRegistry {
    registry: Registry,

    pub contributions_counter: GaugeVec,
    pub total_collected_amount: GaugeVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, RegistrationError> {
        Self::with_registry(Registry::new())
    }

    /// Create the kitty gauges and register them on `registry`.
    /// Fails if a gauge with the same name is already registered there.
    pub fn with_registry(registry: Registry) -> Result<Arc<Self>, RegistrationError> {
        let contributions_counter = register_gauge_vec(
            &registry,
            "contributions_counter",
            "Number of contributions on the kitty",
        )?;

        let total_collected_amount = register_gauge_vec(
            &registry,
            "total_collected_amount",
            "Total collected amount (cents)",
        )?;

        Ok(Arc::new(Self {
            registry,
            contributions_counter,
            total_collected_amount,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

fn register_gauge_vec(
    registry: &Registry,
    name: &'static str,
    help: &str,
) -> Result<GaugeVec, RegistrationError> {
    let wrap = |source| RegistrationError { name, source };

    let gauge = GaugeVec::new(Opts::new(name, help).namespace(NAMESPACE), &KITTY_LABELS)
        .map_err(wrap)?;
    registry.register(Box::new(gauge.clone())).map_err(wrap)?;

    Ok(gauge)
}
