//! Turns an index of open tasks into an ordered stream of report blocks.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::contributors::handle_for;
use super::ledger::EmittedLedger;
use crate::tracking::{AssigneeGroup, BugTask, TrackedBugIndex, UNASSIGNED};

/// Tasks older than this many days are flagged as stale.
pub const STALE_AFTER_DAYS: i64 = 7;

/// How urgently a bug entry should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Created within the last [`STALE_AFTER_DAYS`] days.
    Fresh,
    /// Older than [`STALE_AFTER_DAYS`] days.
    Stale,
}

impl Mood {
    /// Classifies a task age in days.
    #[must_use]
    pub fn for_age(age_days: i64) -> Self {
        if age_days > STALE_AFTER_DAYS {
            Self::Stale
        } else {
            Self::Fresh
        }
    }
}

/// One bug line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugEntry {
    /// Bug number.
    pub number: String,
    /// Bug title.
    pub title: String,
    /// Link to the task.
    pub web_link: String,
    /// Tracker status.
    pub status: String,
    /// Task age in whole days.
    pub age_days: i64,
    /// Fresh or stale.
    pub mood: Mood,
    /// Task creation time.
    pub created: NaiveDateTime,
}

impl BugEntry {
    fn new(task: &BugTask, now: DateTime<Utc>) -> Self {
        let age_days = task.age_in_days(now);
        Self {
            number: task.number().to_string(),
            title: task.title().to_string(),
            web_link: task.web_link().to_string(),
            status: task.status().to_string(),
            age_days,
            mood: Mood::for_age(age_days),
            created: task.created(),
        }
    }
}

/// A print-ready piece of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    /// Heading introducing an assignee's bugs.
    Assignee {
        /// Display name from the tracker.
        name: String,
        /// Launchpad handle, for known contributors.
        handle: Option<String>,
    },
    /// Warning heading introducing bugs nobody is assigned to.
    Unassigned,
    /// A single open bug.
    Bug(BugEntry),
}

impl ReportBlock {
    /// Heading for `assignee`; an empty assignee gets none.
    fn heading(assignee: &str) -> Option<Self> {
        if assignee.is_empty() {
            None
        } else if assignee == UNASSIGNED {
            Some(Self::Unassigned)
        } else {
            Some(Self::Assignee {
                name: assignee.to_string(),
                handle: handle_for(assignee).map(String::from),
            })
        }
    }
}

/// Lazily emits the blocks for one release's index.
///
/// Each bug is recorded in the ledger as it is yielded; bugs already in
/// the ledger are skipped. A heading precedes the first bug yielded for
/// each assignee, so an assignee whose bugs were all emitted earlier gets
/// no heading.
pub struct ReportBlocks<'a> {
    groups: &'a [AssigneeGroup],
    ledger: &'a mut EmittedLedger,
    now: DateTime<Utc>,
    group: usize,
    bug: usize,
    heading_emitted: bool,
    pending: Option<ReportBlock>,
}

/// Starts emitting `index` against the run's ledger.
pub fn emit<'a>(
    index: &'a TrackedBugIndex,
    ledger: &'a mut EmittedLedger,
    now: DateTime<Utc>,
) -> ReportBlocks<'a> {
    ReportBlocks {
        groups: index.groups(),
        ledger,
        now,
        group: 0,
        bug: 0,
        heading_emitted: false,
        pending: None,
    }
}

impl Iterator for ReportBlocks<'_> {
    type Item = ReportBlock;

    fn next(&mut self) -> Option<ReportBlock> {
        if let Some(block) = self.pending.take() {
            return Some(block);
        }
        loop {
            let group = self.groups.get(self.group)?;
            let Some(task) = group.bugs().get(self.bug) else {
                self.group += 1;
                self.bug = 0;
                self.heading_emitted = false;
                continue;
            };
            self.bug += 1;
            if !self.ledger.record(task.number()) {
                continue;
            }

            let entry = ReportBlock::Bug(BugEntry::new(task, self.now));
            if self.heading_emitted {
                return Some(entry);
            }
            self.heading_emitted = true;
            match ReportBlock::heading(group.assignee()) {
                Some(heading) => {
                    self.pending = Some(entry);
                    return Some(heading);
                }
                None => return Some(entry),
            }
        }
    }
}
