use axum::{body::Bytes, extract::State, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::api::error::{parse_body, ApiError};
use crate::api::AppState;
use crate::services::timezone::{default_zones, format_zones, ZoneResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct TimezonesResponse {
    pub timezones: Vec<String>,
}

/// Body of `POST /api/time`. Anything other than an array of zones means the default list.
#[derive(Debug, Default, Deserialize)]
pub struct TimeRequest {
    #[serde(default)]
    pub timezones: Option<Value>,
}

impl TimeRequest {
    /// Requested zones in order. Non-string entries are kept as their JSON
    /// text so they come back as invalid in their position.
    pub fn zones(&self) -> Vec<String> {
        match &self.timezones {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| match entry {
                    Value::String(zone) => zone.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimesResponse {
    pub times: Vec<ZoneResult>,
}

pub async fn list_timezones() -> Json<TimezonesResponse> {
    Json(TimezonesResponse {
        timezones: default_zones(),
    })
}

/// Formats "now" for each requested zone. Unknown zones come back as
/// error entries in their position; they never fail the request.
pub async fn current_times(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TimesResponse>, ApiError> {
    let request: TimeRequest = parse_body(&body)?;
    let zones = request.zones();

    let times = format_zones(state.clock.now(), zones.as_slice());

    let invalid: Vec<&str> = times
        .iter()
        .filter(|t| t.is_invalid())
        .map(ZoneResult::timezone)
        .collect();
    if !invalid.is_empty() {
        warn!("Unknown timezone(s) requested: {}", invalid.join(", "));
    }

    Ok(Json(TimesResponse { times }))
}
