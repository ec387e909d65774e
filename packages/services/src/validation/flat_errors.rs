use std::collections::HashMap;

use super::validation_error::ValidationError;

/// A mapping of field names to their validation error messages
pub type ValidationErrors = HashMap<String, Vec<String>>;

/// Anything that can record `(key, message)` pairs for later display
pub trait ErrorCollector {
    fn add_error(&mut self, field: &str, message: String);
}

impl ErrorCollector for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message);
    }
}

// Helper trait for combining validation errors
pub trait ValidationErrorsExt {
    fn merge(&mut self, other: ValidationErrors);
}

impl ValidationErrorsExt for ValidationErrors {
    fn merge(&mut self, other: ValidationErrors) {
        for (field, mut errors) in other {
            self.entry(field)
                .or_insert_with(Vec::new)
                .append(&mut errors);
        }
    }
}

/// Flat key to ordered messages, the result of normalizing a nested report.
///
/// An empty set is the success case. Messages keep the order they were
/// reported in; the order of keys relative to each other is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatErrorSet {
    entries: ValidationErrors,
}

impl FlatErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn message_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Append messages under `key`. An empty batch leaves no entry behind.
    pub(crate) fn append<I>(&mut self, key: String, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut messages = messages.into_iter().peekable();
        if messages.peek().is_none() {
            return;
        }
        self.entries.entry(key).or_insert_with(Vec::new).extend(messages);
    }

    pub fn merge(&mut self, other: FlatErrorSet) {
        self.entries.merge(other.entries);
    }

    /// Hand every `(key, message)` pair to a collector, keeping per-key order.
    pub fn report_to<C>(&self, collector: &mut C)
    where
        C: ErrorCollector + ?Sized,
    {
        for (key, messages) in &self.entries {
            for message in messages {
                collector.add_error(key, message.clone());
            }
        }
    }

    /// `None` when there is nothing to report
    pub fn into_validation_error(self) -> Option<ValidationError> {
        if self.entries.is_empty() {
            None
        } else {
            Some(ValidationError {
                errors: self.entries,
            })
        }
    }

    pub fn into_inner(self) -> ValidationErrors {
        self.entries
    }
}
