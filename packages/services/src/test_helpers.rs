use chrono::{NaiveDate, NaiveDateTime};
use models::prelude::{Issue, NewIssue};
use serde_json::{Map, Value};

pub fn timestamp(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub fn sample_issue(title: &str) -> Issue {
    NewIssue {
        title: title.to_string(),
        body: None,
        watcher_emails: Vec::new(),
    }
    .into_issue(timestamp(2024, 5, 1))
}

pub fn raw(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
