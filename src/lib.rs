pub mod config;
pub mod modules;
pub mod services;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use config::Config;
use modules::debug::{debug_routes, DebugState};
use services::lyf::LyfClient;
use services::metrics::{KittyMetricsCollector, MetricsRegistry};
use services::poller::{PollSummary, PollerEngine};
use services::supervisor::{wait_for_shutdown, Supervisor};

pub fn create_app(metrics: Arc<MetricsRegistry>, debug: DebugState) -> Router {
    let scrape_routes = Router::new()
        .route("/metrics", get(scrape))
        .with_state(metrics);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(scrape_routes)
        .merge(debug_routes(debug))
        .layer(TraceLayer::new_for_http())
}

async fn root() -> &'static str {
    "Lyf Kitty Exporter"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Current kitty gauges in the Prometheus text exposition format
async fn scrape(State(metrics): State<Arc<MetricsRegistry>>) -> Response {
    match metrics.export() {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to export metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Serve `app` on `listener` until `shutdown` is set.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: watch::Receiver<bool>,
) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown))
        .await
}

/// Bind the metrics server and run it next to the poller until one of them
/// stops or `os_signal` resolves.
pub async fn run<F>(
    config: Config,
    metrics: Arc<MetricsRegistry>,
    os_signal: F,
) -> std::io::Result<PollSummary>
where
    F: Future<Output = ()>,
{
    let supervisor = Supervisor::new();

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(port = config.port, "Server listening");

    let app = create_app(metrics.clone(), DebugState::new(&config));
    let engine = PollerEngine::new(
        LyfClient::new(),
        KittyMetricsCollector::new(metrics),
        config.url.clone(),
        config.delay,
    );

    tracing::info!(delay = ?config.delay, url = %config.url, "Starting kitty poller");

    supervisor
        .run(
            serve(listener, app, supervisor.shutdown_signal()),
            engine.run(supervisor.shutdown_signal()),
            os_signal,
        )
        .await
}
