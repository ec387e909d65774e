use serde_json::{Map, Value};

use crate::validation::{
    Contract, FieldValidator, KeySegment, NormalizeError, ProjectedInput, StaticSchema,
    ValidationReport,
};

pub const ISSUE_SCHEMA: StaticSchema = StaticSchema(&["issue_attributes", "watcher_email"]);

pub const TITLE_MAX_LENGTH: usize = 120;
pub const BODY_MAX_LENGTH: usize = 10_000;

/// Rules for opening an issue
pub struct IssueContract;

impl Contract for IssueContract {
    fn check(&self, input: &ProjectedInput) -> Result<ValidationReport, NormalizeError> {
        let mut report = ValidationReport::new();

        match input.get("issue_attributes") {
            None => report.add_message(&[KeySegment::Base], "issue attributes are required")?,
            Some(Value::Object(attributes)) => check_attributes(attributes, &mut report)?,
            Some(_) => {
                report.add_message(&[KeySegment::from("issue_attributes")], "must be a hash")?
            }
        }

        if let Some(email) = input.get("watcher_email") {
            FieldValidator::validate_email(
                email,
                &[KeySegment::from("watcher_email")],
                &mut report,
            )?;
        }

        Ok(report)
    }
}

fn check_attributes(
    attributes: &Map<String, Value>,
    report: &mut ValidationReport,
) -> Result<(), NormalizeError> {
    let title_path = [KeySegment::from("issue_attributes"), KeySegment::from("title")];
    FieldValidator::validate_required_string(attributes.get("title"), &title_path, report)?;
    FieldValidator::validate_max_length(
        attributes.get("title"),
        TITLE_MAX_LENGTH,
        &title_path,
        report,
    )?;

    let body_path = [KeySegment::from("issue_attributes"), KeySegment::from("body")];
    match attributes.get("body") {
        None | Some(Value::Null) => {}
        Some(body @ Value::String(_)) => {
            FieldValidator::validate_max_length(Some(body), BODY_MAX_LENGTH, &body_path, report)?
        }
        Some(_) => report.add_message(&body_path, "must be a string")?,
    }

    Ok(())
}
