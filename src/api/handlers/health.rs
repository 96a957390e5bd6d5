use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::utils::datetime::format_utc_iso;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub now: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = state.clock.now();
    let uptime = now
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        now: format_utc_iso(&now),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}
