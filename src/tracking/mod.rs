//! Release tracking report: bug tasks and the per-assignee open-bug index.

pub mod index;
pub mod task;

pub use index::{is_finished, tracked_tasks, AssigneeGroup, TrackedBugIndex, TERMINAL_STATUSES};
pub use task::{BugTask, UNASSIGNED};
