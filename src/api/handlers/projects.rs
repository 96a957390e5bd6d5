use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::{parse_body, ApiError};
use crate::api::AppState;
use crate::database::models::{CreateProjectRequest, Project};
use crate::utils::datetime::calendar_date;
use crate::utils::logging::{log_api_request, log_not_found, log_validation_error};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project: Project,
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectsResponse>, ApiError> {
    let projects = state.repo.list_projects()?;
    Ok(Json(ProjectsResponse { projects }))
}

pub async fn create_project(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let request: CreateProjectRequest = parse_body(&body)?;
    let today = calendar_date(&state.clock.now());

    let new = request.into_new_project(&today).map_err(|e| {
        log_validation_error("create_project", "name", &e.to_string());
        ApiError::Validation(e.to_string())
    })?;

    let project = state.repo.create_project(new)?;
    log_api_request("POST", "/api/projects", Some(&format!("created {}", project.id)));

    Ok((StatusCode::CREATED, Json(ProjectResponse { project })))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    match state.repo.find_project(&project_id)? {
        Some(project) => Ok(Json(ProjectResponse { project })),
        None => {
            log_not_found("get_project", "project", &project_id);
            Err(ApiError::NotFound("Project not found".to_string()))
        }
    }
}
