use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author recorded when a log is created without one.
pub const DEFAULT_AUTHOR_ID: &str = "u1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    pub project_id: String,
    pub author_id: String,
    pub date: String,
    pub notes: String,
    pub attachments: Vec<String>,
}

/// A daily log with every default resolved, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDailyLog {
    pub project_id: String,
    pub author_id: String,
    pub date: String,
    pub notes: String,
    pub attachments: Vec<String>,
}

/// Body of `POST /api/projects/:projectId/daily-logs`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyLogRequest {
    pub author_id: Option<String>,
    pub notes: Option<String>,
    pub attachments: Option<Vec<String>>,
}

impl CreateDailyLogRequest {
    /// Resolves defaults for a log on `project_id` dated `today`.
    pub fn into_new_daily_log(self, project_id: &str, today: &str) -> NewDailyLog {
        NewDailyLog {
            project_id: project_id.to_string(),
            author_id: self
                .author_id
                .filter(|author| !author.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR_ID.to_string()),
            date: today.to_string(),
            notes: self.notes.unwrap_or_default(),
            attachments: self.attachments.unwrap_or_default(),
        }
    }
}

impl DailyLog {
    /// Assigns a fresh id to `new`.
    pub fn create(new: NewDailyLog) -> Self {
        Self {
            id: format!("dl-{}", Uuid::new_v4().simple()),
            project_id: new.project_id,
            author_id: new.author_id,
            date: new.date,
            notes: new.notes,
            attachments: new.attachments,
        }
    }
}
