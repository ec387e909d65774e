use models::prelude::{Issue, NewIssue};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::contract::{IssueContract, ISSUE_SCHEMA};
use super::IssueRepository;
use crate::errors::ServiceError;
use crate::interaction::{Interaction, Outcome};
use crate::validation::{Contract, FieldProjector, StaticSchema};

#[derive(Deserialize)]
struct IssueAttributes {
    title: String,
    body: Option<String>,
}

#[derive(Deserialize)]
struct CreateIssueParams {
    issue_attributes: IssueAttributes,
    watcher_email: Option<String>,
}

pub struct CreateIssue {
    pub issue_repository: Box<dyn IssueRepository>,
    projector: FieldProjector<StaticSchema>,
    contract: IssueContract,
}

impl CreateIssue {
    pub fn new(issue_repository: Box<dyn IssueRepository>) -> Self {
        Self {
            issue_repository,
            projector: FieldProjector::new(ISSUE_SCHEMA),
            contract: IssueContract,
        }
    }
}

impl Interaction for CreateIssue {
    type Input = Map<String, Value>;
    type Output = Issue;

    fn call(&self, params: Map<String, Value>) -> Result<Outcome<Issue>, ServiceError> {
        let input = self.projector.project(params)?;

        let errors = self.contract.validate(&input).map_err(|e| {
            tracing::error!(error = %e, "issue contract produced a malformed report");
            e
        })?;
        if let Some(invalid) = errors.into_validation_error() {
            tracing::info!(fields = invalid.errors.len(), "issue rejected");
            return Ok(Outcome::Invalid(invalid));
        }

        let params: CreateIssueParams = input.decode()?;
        let body = params
            .issue_attributes
            .body
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        let new_issue = NewIssue {
            title: params.issue_attributes.title.trim().to_string(),
            body,
            watcher_emails: params.watcher_email.into_iter().collect(),
        };

        let issue = self.issue_repository.insert(new_issue).map_err(|e| {
            tracing::warn!(error = %e, "failed to insert issue");
            e
        })?;

        tracing::info!(issue_id = %issue.id, "issue created");
        Ok(Outcome::Success(issue))
    }
}
