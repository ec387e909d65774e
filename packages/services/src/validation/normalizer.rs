use serde_json::Value;

use super::error::NormalizeError;
use super::flat_errors::FlatErrorSet;
use super::report::{KeySegment, ReportNode, ValidationReport};

/// Flat key used for errors that are not attached to a field
pub const BASE_KEY: &str = "base";

pub const KEY_SEPARATOR: &str = "_";

/// The key a top-level segment contributes to a flat key
pub fn top_level_key(segment: &KeySegment) -> String {
    match segment {
        KeySegment::Base => BASE_KEY.to_string(),
        other => other.to_string(),
    }
}

/// Flatten a nested report into `joined_key => messages`.
///
/// `{"issue_attributes": {"title": ["is missing"]}}` becomes
/// `{"issue_attributes_title": ["is missing"]}` and the whole-object key
/// becomes `base`. Fails on a whole-object key below the top level.
pub fn normalize(report: &ValidationReport) -> Result<FlatErrorSet, NormalizeError> {
    let mut errors = FlatErrorSet::new();
    for (segment, node) in report.entries() {
        if segment.is_blank_name() {
            return Err(NormalizeError::shape_mismatch(&[segment.clone()], "empty key"));
        }
        let mut path = KeyPath::root(segment);
        collect(node, &mut path, &mut errors)?;
    }
    Ok(errors)
}

/// Parse an untyped report and normalize it in one step
pub fn normalize_json(raw: &Value) -> Result<FlatErrorSet, NormalizeError> {
    normalize(&ValidationReport::from_json(raw)?)
}

struct KeyPath<'a> {
    segments: Vec<&'a KeySegment>,
}

impl<'a> KeyPath<'a> {
    fn root(segment: &'a KeySegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    fn flat_key(&self) -> String {
        let mut parts = self.segments.iter();
        let mut key = parts.next().map(|s| top_level_key(s)).unwrap_or_default();
        for segment in parts {
            key.push_str(KEY_SEPARATOR);
            key.push_str(&segment.to_string());
        }
        key
    }

    fn to_owned_segments(&self) -> Vec<KeySegment> {
        self.segments.iter().map(|s| (*s).clone()).collect()
    }
}

fn collect<'a>(
    node: &'a ReportNode,
    path: &mut KeyPath<'a>,
    errors: &mut FlatErrorSet,
) -> Result<(), NormalizeError> {
    match node {
        ReportNode::Messages(messages) => {
            errors.append(path.flat_key(), messages.iter().cloned());
            Ok(())
        }
        ReportNode::Nested(children) => {
            for (segment, child) in children {
                if *segment == KeySegment::Base {
                    let mut offending = path.to_owned_segments();
                    offending.push(KeySegment::Base);
                    return Err(NormalizeError::shape_mismatch(
                        &offending,
                        "null key below the top level",
                    ));
                }
                if segment.is_blank_name() {
                    let mut offending = path.to_owned_segments();
                    offending.push(segment.clone());
                    return Err(NormalizeError::shape_mismatch(&offending, "empty key"));
                }
                path.segments.push(segment);
                collect(child, path, errors)?;
                path.segments.pop();
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn flat(raw: Value) -> FlatErrorSet {
        normalize_json(&raw).unwrap()
    }

    #[test]
    fn test_empty_report_is_empty_set() {
        assert!(normalize(&ValidationReport::new()).unwrap().is_empty());
        assert!(flat(json!({})).is_empty());
        assert!(flat(json!({ "name": [], "address": { "city": [] } })).is_empty());
    }

    #[test]
    fn test_null_key_maps_to_base() {
        let errors = flat(json!({ "": ["is required"] }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("base").unwrap(), &["is required".to_string()]);
    }

    #[test]
    fn test_nested_keys_join_with_underscore() {
        let errors = flat(json!({ "issue_attributes": { "title": ["is missing"] } }));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("issue_attributes_title").unwrap(),
            &["is missing".to_string()]
        );
    }

    #[test]
    fn test_messages_keep_order() {
        let errors = flat(json!({ "email": ["is invalid", "is too long"] }));

        assert_eq!(
            errors.get("email").unwrap(),
            &["is invalid".to_string(), "is too long".to_string()]
        );
    }

    #[test]
    fn test_mixed_base_and_field() {
        let errors = flat(json!({ "": ["base problem"], "name": ["is missing"] }));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("base").unwrap(), &["base problem".to_string()]);
        assert_eq!(errors.get("name").unwrap(), &["is missing".to_string()]);
    }

    #[test]
    fn test_integer_segments_use_their_string_form() {
        let mut report = ValidationReport::new();
        report
            .add_message(
                &[KeySegment::from("tags"), KeySegment::Index(0), KeySegment::from("name")],
                "is blank",
            )
            .unwrap();
        report
            .add_message(&[KeySegment::Index(7)], "is out of range")
            .unwrap();

        let errors = normalize(&report).unwrap();
        assert_eq!(errors.get("tags_0_name").unwrap(), &["is blank".to_string()]);
        assert_eq!(errors.get("7").unwrap(), &["is out of range".to_string()]);
    }

    #[test]
    fn test_raw_number_is_shape_mismatch() {
        let err = normalize_json(&json!({ "age": 3 })).unwrap_err();

        assert_eq!(
            err,
            NormalizeError::ShapeMismatch {
                path: "age".to_string(),
                found: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_nested_base_is_shape_mismatch() {
        let mut nested = BTreeMap::new();
        nested.insert(KeySegment::Base, ReportNode::Messages(vec!["nope".to_string()]));
        let mut entries = BTreeMap::new();
        entries.insert(KeySegment::from("address"), ReportNode::Nested(nested));

        let err = normalize(&ValidationReport::from_entries(entries)).unwrap_err();
        assert!(matches!(err, NormalizeError::ShapeMismatch { ref path, .. } if path == "address.<base>"));
    }

    #[test]
    fn test_empty_name_is_shape_mismatch() {
        let mut nested = BTreeMap::new();
        nested.insert(KeySegment::from(""), ReportNode::Messages(vec!["dangling".to_string()]));
        let mut entries = BTreeMap::new();
        entries.insert(KeySegment::from("a"), ReportNode::Nested(nested));

        let err = normalize(&ValidationReport::from_entries(entries)).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::ShapeMismatch {
                path: "a.".to_string(),
                found: "empty key".to_string(),
            }
        );

        let mut entries = BTreeMap::new();
        entries.insert(KeySegment::from(""), ReportNode::Messages(vec!["unnamed".to_string()]));
        let err = normalize(&ValidationReport::from_entries(entries)).unwrap_err();
        assert!(matches!(err, NormalizeError::ShapeMismatch { ref found, .. } if found == "empty key"));
    }

    #[test]
    fn test_message_count_is_preserved() {
        let raw = json!({
            "": ["base problem", "another"],
            "email": ["is invalid"],
            "issue_attributes": {
                "title": ["is missing", "is too short"],
                "labels": { "0": ["is unknown"] },
            },
        });
        let report = ValidationReport::from_json(&raw).unwrap();

        let errors = normalize(&report).unwrap();

        assert_eq!(errors.message_count(), report.message_count());
        assert_eq!(errors.message_count(), 6);
        assert_eq!(errors.get("issue_attributes_labels_0").unwrap(), &["is unknown".to_string()]);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = json!({
            "": ["base problem"],
            "email": ["is invalid", "is too long"],
            "issue_attributes": { "title": ["is missing"], "body": ["is too long"] },
        });
        let report = ValidationReport::from_json(&raw).unwrap();

        let first = normalize(&report).unwrap();
        let second = normalize(&report).unwrap();

        let mut first_keys: Vec<&str> = first.keys().collect();
        let mut second_keys: Vec<&str> = second.keys().collect();
        first_keys.sort();
        second_keys.sort();
        assert_eq!(first_keys, second_keys);
        for key in first_keys {
            assert_eq!(first.get(key), second.get(key));
        }
    }

    #[test]
    fn test_top_level_key() {
        assert_eq!(top_level_key(&KeySegment::Base), "base");
        assert_eq!(top_level_key(&KeySegment::from("email")), "email");
        assert_eq!(top_level_key(&KeySegment::Index(3)), "3");
    }
}
