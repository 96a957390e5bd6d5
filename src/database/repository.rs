//! Data access contract used by the HTTP handlers.
//!
//! Handlers only ever see `dyn ProjectRepository`, so the in-memory store can
//! be replaced by a persistent one without touching them.

use thiserror::Error;

use crate::database::models::{DailyLog, NewDailyLog, NewProject, Project};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    #[error("Store unavailable")]
    Unavailable,
}

/// Append-only storage for projects and their daily logs.
pub trait ProjectRepository: Send + Sync {
    /// All projects in creation order.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;

    fn find_project(&self, project_id: &str) -> RepoResult<Option<Project>>;

    /// Stores a project under a freshly generated id.
    fn create_project(&self, new: NewProject) -> RepoResult<Project>;

    /// Logs whose `project_id` matches, in creation order.
    fn list_daily_logs(&self, project_id: &str) -> RepoResult<Vec<DailyLog>>;

    /// Stores a log. Fails with [`RepoError::ProjectNotFound`] and stores
    /// nothing when the referenced project does not exist.
    fn create_daily_log(&self, new: NewDailyLog) -> RepoResult<DailyLog>;
}
