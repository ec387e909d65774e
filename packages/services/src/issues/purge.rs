use chrono::{Duration, NaiveDateTime};

use super::IssueRepository;
use crate::errors::ServiceError;
use crate::interaction::{Interaction, Outcome};
use crate::settings::ServiceSettings;

/// Remove closed issues that fell out of the retention window
pub struct PurgeStaleIssues {
    pub issue_repository: Box<dyn IssueRepository>,
    retention: Duration,
}

impl PurgeStaleIssues {
    pub fn new(issue_repository: Box<dyn IssueRepository>, settings: &ServiceSettings) -> Self {
        Self {
            issue_repository,
            retention: Duration::try_days(settings.purge_retention_days).unwrap_or(Duration::MAX),
        }
    }

    pub fn cutoff(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(self.retention)
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl Interaction for PurgeStaleIssues {
    /// The moment the purge is evaluated against
    type Input = NaiveDateTime;
    /// Rows removed
    type Output = u64;

    fn call(&self, now: NaiveDateTime) -> Result<Outcome<u64>, ServiceError> {
        let cutoff = self.cutoff(now);
        let removed = self.issue_repository.delete_closed_before(cutoff)?;

        tracing::info!(%cutoff, removed, "stale issues purged");
        Ok(Outcome::Success(removed))
    }
}
