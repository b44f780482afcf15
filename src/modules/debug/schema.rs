use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

use crate::config::Config;

/// Process facts captured at startup for the debug routes
#[derive(Debug, Clone)]
pub struct DebugState {
    pub config: Config,
    pub started_at: DateTime<Utc>,
    pub started: Instant,
}

impl DebugState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }
}

// Response DTO for GET /debug/runtime
#[derive(Debug, Serialize)]
pub struct RuntimeResponse {
    pub version: &'static str,
    pub pid: u32,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: u64,
    pub workers: usize,
    pub alive_tasks: usize,
    pub target_url: String,
    pub delay_secs: f64,
    pub port: u16,
}
