//! Error types for report assembly and its inputs.

use thiserror::Error;

use crate::ports::PortError;

/// Errors raised while turning a raw tracker record into a `BugTask`.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The record was null or an empty object.
    #[error("task record for bug {0} is empty")]
    EmptyRecord(String),

    /// A field was missing or had the wrong type.
    #[error("task record for bug {bug} is malformed: {source}")]
    Malformed {
        /// Bug number the record belongs to.
        bug: String,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The creation date did not match the tracker's date format.
    #[error("task record for bug {bug} has unparsable date {value:?}: {source}")]
    InvalidDate {
        /// Bug number the record belongs to.
        bug: String,
        /// The raw `date_created` value.
        value: String,
        /// Underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// A changes file that is not a well-formed deb822 paragraph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("changes file line {line} is not a field or continuation: {content:?}")]
pub struct ChangesError {
    /// 1-based line number in the original text.
    pub line: usize,
    /// The offending line.
    pub content: String,
}

/// Failure to attribute bugs to a single pending upload.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The archive or changes-file fetch failed.
    #[error("fetching {what} failed: {source}")]
    Fetch {
        /// What was being fetched.
        what: &'static str,
        /// Error from the archive port.
        #[source]
        source: PortError,
    },

    /// The changes file could not be parsed.
    #[error(transparent)]
    Changes(#[from] ChangesError),
}

/// Errors that abort processing of one release, or of the whole run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The tracking report is missing expected structure.
    #[error("tracking report for {release} is malformed: {reason}")]
    MalformedReport {
        /// Series being processed.
        release: String,
        /// What was wrong.
        reason: String,
    },

    /// A task record inside the tracking report was unusable.
    #[error("tracking report for {release} has a bad task: {source}")]
    BadTask {
        /// Series being processed.
        release: String,
        /// The task-level failure.
        #[source]
        source: TaskError,
    },

    /// A collaborator fetch for the whole release failed.
    #[error("failed to fetch {what} for {release}: {source}")]
    Fetch {
        /// Series being processed.
        release: String,
        /// What was being fetched.
        what: &'static str,
        /// Error from the port.
        #[source]
        source: PortError,
    },

    /// A requested release is not currently supported.
    #[error("unknown release {requested:?} (supported: {supported})")]
    UnknownRelease {
        /// The series name given on the command line.
        requested: String,
        /// Comma-separated supported series.
        supported: String,
    },

    /// The release catalog could not be read.
    #[error("release catalog unavailable: {0}")]
    Catalog(#[source] PortError),

    /// Writing the rendered report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
