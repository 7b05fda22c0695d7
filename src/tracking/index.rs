//! Per-assignee index of bug tasks that still need attention.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde_json::{Map, Value};

use super::task::BugTask;
use crate::error::ReportError;

/// Statuses that count as resolved without looking at the upload queue.
pub const TERMINAL_STATUSES: [&str; 3] = ["Fix Committed", "Fix Released", "Incomplete"];

/// Returns whether `task` no longer needs to be reported.
///
/// A task is finished when its status is terminal, or as soon as an
/// upload fixing the bug is waiting in the queue: tracker statuses lag
/// the queue by hours to days.
#[must_use]
pub fn is_finished(task: &BugTask, queued: &HashSet<String>) -> bool {
    TERMINAL_STATUSES.contains(&task.status()) || queued.contains(task.number())
}

/// Extracts the bug-number mapping from a tracking document.
///
/// # Errors
///
/// Returns [`ReportError::MalformedReport`] if there is no object-valued
/// `tasks` key.
pub fn tracked_tasks<'a>(
    document: &'a Value,
    release: &str,
) -> Result<&'a Map<String, Value>, ReportError> {
    document.get("tasks").and_then(Value::as_object).ok_or_else(|| ReportError::MalformedReport {
        release: release.to_string(),
        reason: "missing `tasks` object".to_string(),
    })
}

/// Open tasks for one assignee, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeGroup {
    assignee: String,
    bugs: Vec<BugTask>,
}

impl AssigneeGroup {
    /// The assignee as reported by the tracker.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Open tasks for this assignee.
    #[must_use]
    pub fn bugs(&self) -> &[BugTask] {
        &self.bugs
    }

    /// Looks up a task by bug number.
    #[must_use]
    pub fn get(&self, number: &str) -> Option<&BugTask> {
        self.bugs.iter().find(|task| task.number() == number)
    }

    fn upsert(&mut self, task: BugTask) {
        match self.bugs.iter_mut().find(|existing| existing.number() == task.number()) {
            Some(existing) => *existing = task,
            None => self.bugs.push(task),
        }
    }
}

/// Open, team-relevant tasks of one release grouped by assignee.
///
/// Built fresh for every release; holds no state across releases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedBugIndex {
    groups: Vec<AssigneeGroup>,
    positions: HashMap<String, usize>,
}

impl TrackedBugIndex {
    /// Builds the index from a release's bug-number → task-list mapping.
    ///
    /// Tasks whose teams do not intersect `teams` are skipped, as are
    /// finished tasks (see [`is_finished`]). Within an assignee, a later
    /// task for the same bug replaces the earlier one in place.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedReport`] when a bug's value is not
    /// a list, and [`ReportError::BadTask`] when a task record is unusable.
    pub fn build(
        tasks: &Map<String, Value>,
        release: &str,
        teams: &BTreeSet<String>,
        queued: &HashSet<String>,
    ) -> Result<Self, ReportError> {
        let mut index = Self::default();
        for (number, entries) in tasks {
            let entries = entries.as_array().ok_or_else(|| ReportError::MalformedReport {
                release: release.to_string(),
                reason: format!("tasks for bug {number} are not a list"),
            })?;
            for entry in entries {
                let task = BugTask::from_raw(number, release, entry).map_err(|source| {
                    ReportError::BadTask { release: release.to_string(), source }
                })?;
                if task.teams().is_disjoint(teams) {
                    continue;
                }
                if is_finished(&task, queued) {
                    tracing::debug!(bug = %number, status = task.status(), "skipping finished task");
                    continue;
                }
                index.group_mut(task.assignee()).upsert(task);
            }
        }
        Ok(index)
    }

    /// Returns the group for `assignee`, creating an empty one if needed.
    fn group_mut(&mut self, assignee: &str) -> &mut AssigneeGroup {
        let position = match self.positions.get(assignee) {
            Some(&position) => position,
            None => {
                self.groups
                    .push(AssigneeGroup { assignee: assignee.to_string(), bugs: Vec::new() });
                let position = self.groups.len() - 1;
                self.positions.insert(assignee.to_string(), position);
                position
            }
        };
        &mut self.groups[position]
    }

    /// Groups in the order their assignee was first seen.
    #[must_use]
    pub fn groups(&self) -> &[AssigneeGroup] {
        &self.groups
    }

    /// The group for `assignee`, if any open task is assigned to them.
    #[must_use]
    pub fn group(&self, assignee: &str) -> Option<&AssigneeGroup> {
        self.positions.get(assignee).map(|&position| &self.groups[position])
    }

    /// Whether no open task matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of indexed tasks across all assignees.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|group| group.bugs.len()).sum()
    }
}
