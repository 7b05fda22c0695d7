//! Discourse-flavoured markdown for report blocks.

use std::fmt;

use super::assembler::{BugEntry, Mood, ReportBlock};

/// Heading that opens a release's section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseHeading<'a>(pub &'a str);

impl fmt::Display for ReleaseHeading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}\n---\n", self.0)
    }
}

impl Mood {
    /// Emoji shortcode shown next to the status.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Fresh => ":sunglasses:",
            Self::Stale => ":sleeping:",
        }
    }
}

impl fmt::Display for BugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]({})\n", self.title, self.web_link)?;
        writeln!(
            f,
            "{} {} Task created {} days ago; {}",
            self.status,
            self.mood.marker(),
            self.age_days,
            self.created.format("%Y-%m-%d %H:%M:%S"),
        )?;
        // Discourse turns the next line into a heading without the gap.
        writeln!(f, "\n\n---\n")
    }
}

impl fmt::Display for ReportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignee { name, handle: Some(handle) } => {
                writeln!(f, "#### {name} (@{handle})\n")
            }
            Self::Assignee { name, handle: None } => writeln!(f, "#### {name}\n"),
            Self::Unassigned => writeln!(f, "#### :warning: Unassigned :warning:\n"),
            Self::Bug(entry) => fmt::Display::fmt(entry, f),
        }
    }
}
