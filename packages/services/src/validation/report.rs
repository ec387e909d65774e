use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::error::NormalizeError;

/// A single key inside a nested validation report
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeySegment {
    /// Errors about the object as a whole rather than one of its fields
    Base,
    Name(String),
    Index(i64),
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySegment::Base => f.write_str("<base>"),
            KeySegment::Name(name) => f.write_str(name),
            KeySegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl KeySegment {
    /// A name with no characters, which would leave a dangling separator in a flat key
    pub fn is_blank_name(&self) -> bool {
        matches!(self, KeySegment::Name(name) if name.is_empty())
    }
}

impl From<&str> for KeySegment {
    fn from(name: &str) -> Self {
        KeySegment::Name(name.to_string())
    }
}

impl From<String> for KeySegment {
    fn from(name: String) -> Self {
        KeySegment::Name(name)
    }
}

impl From<i64> for KeySegment {
    fn from(index: i64) -> Self {
        KeySegment::Index(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportNode {
    Messages(Vec<String>),
    Nested(BTreeMap<KeySegment, ReportNode>),
}

impl ReportNode {
    fn message_count(&self) -> usize {
        match self {
            ReportNode::Messages(messages) => messages.len(),
            ReportNode::Nested(children) => children.values().map(ReportNode::message_count).sum(),
        }
    }
}

/// The nested error report a contract produces for one validation run.
///
/// An empty report means the input was valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: BTreeMap<KeySegment, ReportNode>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<KeySegment, ReportNode>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&KeySegment, &ReportNode)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages anywhere in the report
    pub fn message_count(&self) -> usize {
        self.entries.values().map(ReportNode::message_count).sum()
    }

    /// Append `message` to the list found at `path`, creating intermediate
    /// levels as needed.
    pub fn add_message(
        &mut self,
        path: &[KeySegment],
        message: impl Into<String>,
    ) -> Result<(), NormalizeError> {
        let (last, parents) = path
            .split_last()
            .ok_or_else(|| NormalizeError::shape_mismatch(path, "message outside of any key"))?;
        if let Some(blank) = path.iter().position(KeySegment::is_blank_name) {
            return Err(NormalizeError::shape_mismatch(&path[..=blank], "empty key"));
        }

        let mut level = &mut self.entries;
        for (depth, segment) in parents.iter().enumerate() {
            let node = level
                .entry(segment.clone())
                .or_insert_with(|| ReportNode::Nested(BTreeMap::new()));
            level = match node {
                ReportNode::Nested(children) => children,
                ReportNode::Messages(_) => {
                    return Err(NormalizeError::shape_mismatch(
                        &path[..=depth],
                        "message list where a nested report was expected",
                    ))
                }
            };
        }

        match level
            .entry(last.clone())
            .or_insert_with(|| ReportNode::Messages(Vec::new()))
        {
            ReportNode::Messages(messages) => {
                messages.push(message.into());
                Ok(())
            }
            ReportNode::Nested(_) => Err(NormalizeError::shape_mismatch(
                path,
                "nested report where a message list was expected",
            )),
        }
    }

    /// Parse an untyped report as emitted by an external validator.
    ///
    /// The empty key at the top level stands for the whole-object key, since
    /// a null key serialises to `""`. Anything that is not an object of
    /// objects and string arrays is rejected.
    pub fn from_json(value: &Value) -> Result<Self, NormalizeError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => {
                let mut entries = BTreeMap::new();
                let mut path = Vec::new();
                for (key, child) in map {
                    let segment = if key.is_empty() {
                        KeySegment::Base
                    } else {
                        KeySegment::Name(key.clone())
                    };
                    path.push(segment.clone());
                    let node = parse_node(child, &mut path)?;
                    path.pop();
                    entries.insert(segment, node);
                }
                Ok(Self { entries })
            }
            other => Err(NormalizeError::shape_mismatch(&[], other.to_string())),
        }
    }
}

fn parse_node(value: &Value, path: &mut Vec<KeySegment>) -> Result<ReportNode, NormalizeError> {
    match value {
        Value::Array(items) => {
            let mut messages = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(message) => messages.push(message.clone()),
                    other => {
                        path.push(KeySegment::Index(index as i64));
                        return Err(NormalizeError::shape_mismatch(path, other.to_string()));
                    }
                }
            }
            Ok(ReportNode::Messages(messages))
        }
        Value::Object(map) => {
            let mut children = BTreeMap::new();
            for (key, child) in map {
                if key.is_empty() {
                    path.push(KeySegment::Base);
                    return Err(NormalizeError::shape_mismatch(
                        path,
                        "null key below the top level",
                    ));
                }
                let segment = KeySegment::Name(key.clone());
                path.push(segment.clone());
                let node = parse_node(child, path)?;
                path.pop();
                children.insert(segment, node);
            }
            Ok(ReportNode::Nested(children))
        }
        other => Err(NormalizeError::shape_mismatch(path, other.to_string())),
    }
}
