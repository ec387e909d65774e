use std::fmt;

use super::flat_errors::{ErrorCollector, ValidationErrors};

/// User-facing validation failure: flat field keys to their messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: ValidationErrors,
}

impl ValidationError {
    /// Create a new validation error with a single field and message
    pub fn new(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self { errors }
    }

    /// Combine multiple validation errors into one
    pub fn combine(mut self, other: ValidationError) -> Self {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_insert_with(Vec::new).extend(messages);
        }
        self
    }

    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Comma-separated `field message` pairs, fields in alphabetical order
    pub fn to_string_list(&self) -> String {
        let mut fields: Vec<&String> = self.errors.keys().collect();
        fields.sort();
        fields
            .into_iter()
            .flat_map(|field| {
                self.errors[field]
                    .iter()
                    .map(move |message| format!("{} {}", field, message))
            })
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl ErrorCollector for ValidationError {
    fn add_error(&mut self, field: &str, message: String) {
        self.errors.add_error(field, message);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ValidationError {}
