//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Serves a cassette's interactions in order, per port/method pair.
///
/// Inputs are not matched: calls are assumed to happen in the order
/// they were recorded.
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Indexes the interactions of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        Self { queues, cursors: HashMap::new() }
    }

    /// Returns the next interaction recorded for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the call and what the cassette holds when
    /// the pair was never recorded or every recording was consumed.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let Some(interaction) = queue.get(*cursor) else {
            return Err(format!(
                "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
                 have been consumed. Last interaction was seq={last_seq}.",
                count = queue.len(),
                last_seq = queue.last().map_or(0, |i| i.seq),
            ));
        };
        *cursor += 1;
        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), tool_version: "0".into(), interactions }
    }

    #[test]
    fn serves_each_pair_in_recorded_order() {
        let cassette = cassette(vec![
            interaction(0, "archive", "fetch_changes", json!({"Ok": "a"})),
            interaction(1, "tracker", "fetch_report", json!({"Ok": {}})),
            interaction(2, "archive", "fetch_changes", json!({"Ok": "b"})),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_interaction("archive", "fetch_changes").unwrap().seq, 0);
        assert_eq!(replayer.next_interaction("tracker", "fetch_report").unwrap().seq, 1);
        let last = replayer.next_interaction("archive", "fetch_changes").unwrap();
        assert_eq!(last.output, json!({"Ok": "b"}));
    }

    #[test]
    fn exhausted_pair_is_an_error() {
        let cassette = cassette(vec![interaction(0, "clock", "now", json!("2024-01-01T00:00:00Z"))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("clock", "now").unwrap();

        let err = replayer.next_interaction("clock", "now").unwrap_err();
        assert!(err.contains("have been consumed"));
    }

    #[test]
    fn unknown_pair_lists_what_is_available() {
        let cassette = cassette(vec![interaction(0, "clock", "now", json!(null))]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let err = replayer.next_interaction("archive", "pending_uploads").unwrap_err();
        assert!(err.contains("no interactions recorded"));
        assert!(err.contains("clock::now"));
    }
}
