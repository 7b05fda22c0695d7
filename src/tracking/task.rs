//! A single bug task pulled from the tracking report.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::TaskError;

/// Assignee value the tracker uses for tasks nobody has picked up.
pub const UNASSIGNED: &str = "Unassigned";

/// Format of `date_created`, e.g. `"Monday, 01. January 2024 00:00 UTC"`.
///
/// The zone name is skipped when parsing; timestamps are taken as UTC.
pub const CREATED_FORMAT: &str = "%A, %d. %B %Y %H:%M %Z";

#[derive(Debug, Deserialize)]
struct RawTask {
    #[serde(default)]
    assignee: Option<String>,
    title: String,
    status: String,
    web_link: String,
    date_created: String,
    team: Vec<String>,
}

/// One (bug, release) task record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugTask {
    number: String,
    release: String,
    assignee: String,
    title: String,
    status: String,
    web_link: String,
    created: NaiveDateTime,
    teams: BTreeSet<String>,
}

impl BugTask {
    /// Builds a task from a raw tracker record.
    ///
    /// A `null` assignee is kept as an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyRecord`] for `null` or `{}`,
    /// [`TaskError::Malformed`] when a field is missing or mistyped, and
    /// [`TaskError::InvalidDate`] when `date_created` does not parse.
    pub fn from_raw(number: &str, release: &str, record: &Value) -> Result<Self, TaskError> {
        let is_empty = match record {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if is_empty {
            return Err(TaskError::EmptyRecord(number.to_string()));
        }

        let raw = RawTask::deserialize(record)
            .map_err(|source| TaskError::Malformed { bug: number.to_string(), source })?;
        let created = NaiveDateTime::parse_from_str(&raw.date_created, CREATED_FORMAT).map_err(
            |source| TaskError::InvalidDate {
                bug: number.to_string(),
                value: raw.date_created.clone(),
                source,
            },
        )?;

        Ok(Self {
            number: number.to_string(),
            release: release.to_string(),
            assignee: raw.assignee.unwrap_or_default(),
            title: raw.title,
            status: raw.status,
            web_link: raw.web_link,
            created,
            teams: raw.team.into_iter().collect(),
        })
    }

    /// Bug number, stable across releases.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Series this task was reported for.
    #[must_use]
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Assignee display name, [`UNASSIGNED`], or empty.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Bug title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tracker status string.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Link to the task on the tracker.
    #[must_use]
    pub fn web_link(&self) -> &str {
        &self.web_link
    }

    /// When the task was created.
    #[must_use]
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    /// Teams the task is tagged for.
    #[must_use]
    pub fn teams(&self) -> &BTreeSet<String> {
        &self.teams
    }

    /// Whole days between task creation and `now`, floored at zero.
    #[must_use]
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now.naive_utc() - self.created).num_days().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "assignee": "A",
            "title": "T",
            "status": "New",
            "web_link": "u",
            "date_created": "Monday, 01. January 2024 00:00 UTC",
            "team": ["x", "y"],
        })
    }

    #[test]
    fn builds_from_full_record() {
        let task = BugTask::from_raw("123", "noble", &record()).unwrap();
        assert_eq!(task.number(), "123");
        assert_eq!(task.release(), "noble");
        assert_eq!(task.assignee(), "A");
        assert_eq!(task.title(), "T");
        assert_eq!(task.status(), "New");
        assert_eq!(task.web_link(), "u");
        assert_eq!(task.created().to_string(), "2024-01-01 00:00:00");
        assert!(task.teams().contains("x") && task.teams().contains("y"));
    }

    #[test]
    fn null_assignee_becomes_empty() {
        let mut raw = record();
        raw["assignee"] = Value::Null;
        let task = BugTask::from_raw("1", "noble", &raw).unwrap();
        assert_eq!(task.assignee(), "");
    }

    #[test]
    fn empty_record_is_rejected() {
        assert!(matches!(
            BugTask::from_raw("1", "noble", &json!({})),
            Err(TaskError::EmptyRecord(bug)) if bug == "1"
        ));
        assert!(matches!(
            BugTask::from_raw("1", "noble", &Value::Null),
            Err(TaskError::EmptyRecord(_))
        ));
    }

    #[test]
    fn missing_field_is_malformed() {
        let mut raw = record();
        raw.as_object_mut().unwrap().remove("status");
        assert!(matches!(
            BugTask::from_raw("1", "noble", &raw),
            Err(TaskError::Malformed { .. })
        ));
    }

    #[test]
    fn bad_date_is_reported() {
        let mut raw = record();
        raw["date_created"] = json!("2024-01-01");
        let err = BugTask::from_raw("1", "noble", &raw).unwrap_err();
        assert!(matches!(err, TaskError::InvalidDate { ref value, .. } if value == "2024-01-01"));
    }

    #[test]
    fn age_counts_whole_days() {
        let task = BugTask::from_raw("1", "noble", &record()).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 9, 12, 0, 0).unwrap();
        assert_eq!(task.age_in_days(now), 8);
        let same_day = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(task.age_in_days(same_day), 0);
    }

    #[test]
    fn age_never_negative() {
        let task = BugTask::from_raw("1", "noble", &record()).unwrap();
        let before = Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(task.age_in_days(before), 0);
    }
}
