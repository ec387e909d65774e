use uuid::Uuid;

use super::IssueRepository;
use crate::errors::ServiceError;
use crate::interaction::{Interaction, Outcome};

pub struct DestroyIssue {
    pub issue_repository: Box<dyn IssueRepository>,
}

impl DestroyIssue {
    pub fn new(issue_repository: Box<dyn IssueRepository>) -> Self {
        Self { issue_repository }
    }
}

impl Interaction for DestroyIssue {
    type Input = Uuid;
    type Output = Uuid;

    fn call(&self, id: Uuid) -> Result<Outcome<Uuid>, ServiceError> {
        let issue = self
            .issue_repository
            .find(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("issue {}", id)))?;

        self.issue_repository.delete(issue.id)?;

        tracing::info!(issue_id = %id, "issue destroyed");
        Ok(Outcome::Success(id))
    }
}
