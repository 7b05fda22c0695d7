//! Upload queue reconciliation: which bugs do pending uploads claim to fix.

pub mod changes;
pub mod resolver;

pub use changes::{ChangesFile, BUGS_FIXED_FIELD};
pub use resolver::{UploadBugResolver, UploadBugSet};
