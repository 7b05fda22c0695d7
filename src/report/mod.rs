//! Report assembly and rendering.

pub mod assembler;
pub mod contributors;
pub mod ledger;
pub mod render;

pub use assembler::{emit, BugEntry, Mood, ReportBlock, ReportBlocks, STALE_AFTER_DAYS};
pub use ledger::EmittedLedger;
pub use render::ReleaseHeading;
