use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub watcher_emails: Vec<String>,
    pub closed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Issue {
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }
}

/// Attributes for an issue that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub body: Option<String>,
    pub watcher_emails: Vec<String>,
}

impl NewIssue {
    /// Materialize with a fresh id, as a store would on insert
    pub fn into_issue(self, created_at: NaiveDateTime) -> Issue {
        Issue {
            id: Uuid::new_v4(),
            title: self.title,
            body: self.body,
            watcher_emails: self.watcher_emails,
            closed_at: None,
            created_at,
        }
    }
}
