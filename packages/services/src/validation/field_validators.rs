use serde_json::Value;

use super::error::NormalizeError;
use super::report::{KeySegment, ValidationReport};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_required_string(
        value: Option<&Value>,
        path: &[KeySegment],
        report: &mut ValidationReport,
    ) -> Result<(), NormalizeError> {
        match value {
            None | Some(Value::Null) => report.add_message(path, "is missing"),
            Some(Value::String(s)) if s.trim().is_empty() => {
                report.add_message(path, "must be filled")
            }
            Some(Value::String(_)) => Ok(()),
            Some(_) => report.add_message(path, "must be a string"),
        }
    }

    /// Strings only; anything else is left to a type check
    pub fn validate_max_length(
        value: Option<&Value>,
        max: usize,
        path: &[KeySegment],
        report: &mut ValidationReport,
    ) -> Result<(), NormalizeError> {
        match value {
            Some(Value::String(s)) if s.chars().count() > max => report.add_message(
                path,
                format!("is too long (maximum is {} characters)", max),
            ),
            _ => Ok(()),
        }
    }

    pub fn validate_email(
        value: &Value,
        path: &[KeySegment],
        report: &mut ValidationReport,
    ) -> Result<(), NormalizeError> {
        let email = match value {
            Value::String(email) => email,
            _ => return report.add_message(path, "must be a string"),
        };

        if email.trim().is_empty() {
            return report.add_message(path, "must be filled");
        }

        // Basic email format validation
        if !email.contains('@') || !email.contains('.') {
            report.add_message(path, "is invalid")?;
        }

        Ok(())
    }
}
