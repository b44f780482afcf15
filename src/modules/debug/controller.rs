use axum::{extract::State, Json};
use std::sync::Arc;

use super::schema::{DebugState, RuntimeResponse};

/// Handler for GET /debug/runtime
/// Reports process and tokio runtime state alongside the resolved config
pub async fn get_runtime(State(state): State<Arc<DebugState>>) -> Json<RuntimeResponse> {
    let runtime = tokio::runtime::Handle::current().metrics();

    Json(RuntimeResponse {
        version: env!("CARGO_PKG_VERSION"),
        pid: std::process::id(),
        started_at: state.started_at,
        uptime_secs: state.started.elapsed().as_secs(),
        workers: runtime.num_workers(),
        alive_tasks: runtime.num_alive_tasks(),
        target_url: state.config.url.clone(),
        delay_secs: state.config.delay.as_secs_f64(),
        port: state.config.port,
    })
}
