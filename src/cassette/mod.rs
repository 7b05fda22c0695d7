//! Cassettes: recorded port interactions for offline, repeatable runs.

pub mod format;
pub mod recorder;
pub mod replayer;
