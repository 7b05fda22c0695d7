//! Clock port used to age bug tasks.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Task ages are relative to this clock, so replayed runs report the
/// same ages they reported when recorded.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
