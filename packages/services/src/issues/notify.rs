use uuid::Uuid;

use super::IssueRepository;
use crate::errors::ServiceError;
use crate::interaction::{Interaction, Outcome};
use crate::notification::{IssueMailer, Notifier};
use crate::settings::ServiceSettings;

/// Tell everyone watching an issue that it was opened
pub struct NotifyIssueWatchers {
    pub issue_repository: Box<dyn IssueRepository>,
    pub notifier: Box<dyn Notifier>,
    mailer: IssueMailer,
}

impl NotifyIssueWatchers {
    pub fn new(
        issue_repository: Box<dyn IssueRepository>,
        notifier: Box<dyn Notifier>,
        settings: &ServiceSettings,
    ) -> Self {
        Self {
            issue_repository,
            notifier,
            mailer: IssueMailer::new(settings),
        }
    }
}

impl Interaction for NotifyIssueWatchers {
    type Input = Uuid;
    /// Number of notifications delivered
    type Output = usize;

    fn call(&self, id: Uuid) -> Result<Outcome<usize>, ServiceError> {
        let issue = self
            .issue_repository
            .find(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("issue {}", id)))?;

        for watcher in &issue.watcher_emails {
            let notification = self.mailer.issue_opened(&issue, watcher);
            if let Err(e) = self.notifier.deliver(&notification) {
                tracing::warn!(issue_id = %issue.id, error = %e, "failed to notify watcher");
                return Err(e.into());
            }
        }

        tracing::info!(
            issue_id = %issue.id,
            delivered = issue.watcher_emails.len(),
            "issue watchers notified"
        );
        Ok(Outcome::Success(issue.watcher_emails.len()))
    }
}
