//! Bugs already printed during this run.

use std::collections::HashSet;

/// Append-only set of bug numbers emitted so far.
///
/// Spans every release processed in one invocation, so a bug tracked
/// for several releases is reported once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmittedLedger {
    emitted: HashSet<String>,
}

impl EmittedLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `bug` has already been emitted.
    #[must_use]
    pub fn contains(&self, bug: &str) -> bool {
        self.emitted.contains(bug)
    }

    /// Records `bug`; returns `false` if it was already present.
    pub fn record(&mut self, bug: &str) -> bool {
        self.emitted.insert(bug.to_string())
    }

    /// Number of distinct bugs emitted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_bug_once() {
        let mut ledger = EmittedLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.record("1"));
        assert!(!ledger.record("1"));
        assert!(ledger.contains("1"));
        assert!(!ledger.contains("2"));
        assert_eq!(ledger.len(), 1);
    }
}
