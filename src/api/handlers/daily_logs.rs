use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::{parse_body, ApiError};
use crate::api::AppState;
use crate::database::models::{CreateDailyLogRequest, DailyLog};
use crate::database::repository::RepoError;
use crate::utils::datetime::calendar_date;
use crate::utils::logging::{log_api_request, log_not_found};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogsResponse {
    pub daily_logs: Vec<DailyLog>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogResponse {
    pub daily_log: DailyLog,
}

/// Logs for one project. An unknown project simply has none.
pub async fn list_daily_logs(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<DailyLogsResponse>, ApiError> {
    let daily_logs = state.repo.list_daily_logs(&project_id)?;
    Ok(Json(DailyLogsResponse { daily_logs }))
}

pub async fn create_daily_log(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<DailyLogResponse>), ApiError> {
    let request: CreateDailyLogRequest = parse_body(&body)?;
    let today = calendar_date(&state.clock.now());
    let new = request.into_new_daily_log(&project_id, &today);

    let daily_log = state.repo.create_daily_log(new).map_err(|e| {
        if let RepoError::ProjectNotFound(id) = &e {
            log_not_found("create_daily_log", "project", id);
        }
        ApiError::from(e)
    })?;
    log_api_request(
        "POST",
        "/api/projects/:projectId/daily-logs",
        Some(&format!("created {} on {}", daily_log.id, project_id)),
    );

    Ok((StatusCode::CREATED, Json(DailyLogResponse { daily_log })))
}
