use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::database::models::{DailyLog, NewDailyLog, NewProject, Project};
use crate::database::repository::{ProjectRepository, RepoError, RepoResult};
use crate::utils::logging::log_store_operation;

#[derive(Debug, Default)]
struct Collections {
    projects: Vec<Project>,
    daily_logs: Vec<DailyLog>,
}

/// Process-lifetime store. Everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one mock project and one daily log.
    pub fn with_demo_data() -> Self {
        info!("Seeding in-memory store with demo data");
        let collections = Collections {
            projects: vec![Project {
                id: "p1".to_string(),
                name: "Mock Project A".to_string(),
                location: "123 Main St".to_string(),
                start_date: "2025-09-01".to_string(),
                end_date: "2025-12-01".to_string(),
                members: vec!["u1".to_string(), "u2".to_string(), "u3".to_string()],
            }],
            daily_logs: vec![DailyLog {
                id: "dl1".to_string(),
                project_id: "p1".to_string(),
                author_id: "u1".to_string(),
                date: "2025-09-08".to_string(),
                notes: "Initial setup and site preparation completed.".to_string(),
                attachments: Vec::new(),
            }],
        };

        Self {
            inner: RwLock::new(collections),
        }
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Collections>> {
        self.inner.read().map_err(|_| RepoError::Unavailable)
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Collections>> {
        self.inner.write().map_err(|_| RepoError::Unavailable)
    }
}

impl ProjectRepository for InMemoryStore {
    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let inner = self.read()?;
        log_store_operation("LIST", "projects", None);
        Ok(inner.projects.clone())
    }

    fn find_project(&self, project_id: &str) -> RepoResult<Option<Project>> {
        let inner = self.read()?;
        log_store_operation("FIND", "projects", Some(project_id));
        Ok(inner.projects.iter().find(|p| p.id == project_id).cloned())
    }

    fn create_project(&self, new: NewProject) -> RepoResult<Project> {
        let mut inner = self.write()?;
        let project = Project::create(new);
        inner.projects.push(project.clone());
        log_store_operation("INSERT", "projects", Some(&project.id));
        Ok(project)
    }

    fn list_daily_logs(&self, project_id: &str) -> RepoResult<Vec<DailyLog>> {
        let inner = self.read()?;
        log_store_operation("LIST", "daily_logs", Some(project_id));
        Ok(inner
            .daily_logs
            .iter()
            .filter(|log| log.project_id == project_id)
            .cloned()
            .collect())
    }

    fn create_daily_log(&self, new: NewDailyLog) -> RepoResult<DailyLog> {
        // Existence check and append share one write lock.
        let mut inner = self.write()?;
        if !inner.projects.iter().any(|p| p.id == new.project_id) {
            return Err(RepoError::ProjectNotFound(new.project_id));
        }

        let log = DailyLog::create(new);
        inner.daily_logs.push(log.clone());
        log_store_operation("INSERT", "daily_logs", Some(&log.id));
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{CreateDailyLogRequest, CreateProjectRequest};

    fn new_project(name: &str) -> NewProject {
        CreateProjectRequest {
            name: Some(name.to_string()),
            ..Default::default()
        }
        .into_new_project("2025-09-08")
        .unwrap()
    }

    #[test]
    fn test_demo_data_is_seeded() {
        let store = InMemoryStore::with_demo_data();
        let projects = store.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "p1");

        let logs = store.list_daily_logs("p1").unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].id, "dl1");
    }

    #[test]
    fn test_log_for_missing_project_is_not_stored() {
        let store = InMemoryStore::new();
        let new = CreateDailyLogRequest::default().into_new_daily_log("nope", "2025-09-08");

        let err = store.create_daily_log(new).unwrap_err();
        assert!(matches!(err, RepoError::ProjectNotFound(id) if id == "nope"));
        assert!(store.list_daily_logs("nope").unwrap().is_empty());
    }

    #[test]
    fn test_logs_are_scoped_and_ordered() {
        let store = InMemoryStore::new();
        let a = store.create_project(new_project("A")).unwrap();
        let b = store.create_project(new_project("B")).unwrap();

        for (project, note) in [(&a, "a1"), (&b, "b1"), (&a, "a2")] {
            let request = CreateDailyLogRequest {
                notes: Some(note.to_string()),
                ..Default::default()
            };
            store
                .create_daily_log(request.into_new_daily_log(&project.id, "2025-09-08"))
                .unwrap();
        }

        let notes: Vec<String> = store
            .list_daily_logs(&a.id)
            .unwrap()
            .into_iter()
            .map(|log| log.notes)
            .collect();
        assert_eq!(notes, vec!["a1".to_string(), "a2".to_string()]);
    }
}
