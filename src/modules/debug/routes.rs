use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller::get_runtime;
use super::schema::DebugState;

pub fn debug_routes(state: DebugState) -> Router {
    Router::new()
        .route("/debug/runtime", get(get_runtime))
        .with_state(Arc::new(state))
}
