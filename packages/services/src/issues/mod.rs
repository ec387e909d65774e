mod contract;
mod create;
mod destroy;
mod notify;
mod purge;

use chrono::NaiveDateTime;
use models::prelude::{Issue, NewIssue};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::errors::RepositoryError;

pub use contract::{IssueContract, BODY_MAX_LENGTH, ISSUE_SCHEMA, TITLE_MAX_LENGTH};
pub use create::CreateIssue;
pub use destroy::DestroyIssue;
pub use notify::NotifyIssueWatchers;
pub use purge::PurgeStaleIssues;

/// Storage for issues, provided by the host application
#[cfg_attr(test, automock)]
pub trait IssueRepository {
    fn insert(&self, issue: NewIssue) -> Result<Issue, RepositoryError>;
    fn find(&self, id: Uuid) -> Result<Option<Issue>, RepositoryError>;
    fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Delete closed issues whose `closed_at` is before `cutoff`, returning how many went
    fn delete_closed_before(&self, cutoff: NaiveDateTime) -> Result<u64, RepositoryError>;
}
