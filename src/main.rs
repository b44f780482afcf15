use lyf_exporter::config::Config;
use lyf_exporter::services::metrics::MetricsRegistry;
use lyf_exporter::services::supervisor::os_shutdown_signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lyf_exporter=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Unable to parse environment variables: {}", e);
            std::process::exit(1);
        }
    };

    let metrics = match MetricsRegistry::new() {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::error!("Unable to register metrics: {}", e);
            std::process::exit(1);
        }
    };

    match lyf_exporter::run(config, metrics, os_shutdown_signal()).await {
        Ok(summary) => tracing::info!(
            successes = summary.successes,
            failures = summary.failures,
            "Exporter stopped"
        ),
        Err(e) => tracing::error!("Metrics server stopped with error: {}", e),
    }
}
