use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::validation::validate_project_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub members: Vec<String>,
}

/// A project with every default resolved, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub members: Vec<String>,
}

/// Body of `POST /api/projects`. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub members: Option<Vec<String>>,
}

impl CreateProjectRequest {
    /// Resolves defaults. `today` fills a missing start date.
    ///
    /// Fails when the name is missing or blank.
    pub fn into_new_project(self, today: &str) -> Result<NewProject> {
        validate_project_name(self.name.as_deref())?;

        Ok(NewProject {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            start_date: self
                .start_date
                .filter(|date| !date.is_empty())
                .unwrap_or_else(|| today.to_string()),
            end_date: self.end_date.unwrap_or_default(),
            members: self.members.unwrap_or_default(),
        })
    }
}

impl Project {
    /// Assigns a fresh id to `new`.
    pub fn create(new: NewProject) -> Self {
        Self {
            id: format!("p-{}", Uuid::new_v4().simple()),
            name: new.name,
            location: new.location,
            start_date: new.start_date,
            end_date: new.end_date,
            members: new.members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolved_once() {
        let request = CreateProjectRequest {
            name: Some("Site B".to_string()),
            ..Default::default()
        };
        let new = request.into_new_project("2025-09-08").unwrap();
        assert_eq!(new.location, "");
        assert_eq!(new.start_date, "2025-09-08");
        assert_eq!(new.end_date, "");
        assert!(new.members.is_empty());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        for name in [None, Some(String::new()), Some("   ".to_string())] {
            let request = CreateProjectRequest {
                name,
                ..Default::default()
            };
            assert!(request.into_new_project("2025-09-08").is_err());
        }
    }

    #[test]
    fn test_ids_are_unique_and_serialized_camel_case() {
        let new = NewProject {
            name: "Tower".to_string(),
            location: "Pier 4".to_string(),
            start_date: "2025-01-01".to_string(),
            end_date: "2025-06-30".to_string(),
            members: vec!["u1".to_string()],
        };
        let a = Project::create(new.clone());
        let b = Project::create(new);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("p-"));

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["startDate"], "2025-01-01");
        assert_eq!(json["endDate"], "2025-06-30");
    }
}
