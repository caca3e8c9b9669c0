// src/store/mod.rs
use tracing::warn;

use crate::model::{AnalysisResult, HistoryEntry};

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub const PENDING_SLOT: &str = "pending";
pub const HISTORY_SLOT: &str = "history";

/// Named-slot storage collaborator. Injected so tests can substitute an
/// in-memory backend for the on-disk one.
pub trait StorageBackend {
    fn read(&self, slot: &str) -> anyhow::Result<Option<String>>;
    fn write(&mut self, slot: &str, content: &str) -> anyhow::Result<()>;
    fn remove(&mut self, slot: &str) -> anyhow::Result<()>;
}

/// Sole owner of the persistent pending/history state. No other component
/// touches the underlying storage.
///
/// Failure semantics: a read, write, or parse failure degrades to "state
/// absent" and is logged; it never surfaces as a blocking error.
pub struct ResultStore {
    backend: Box<dyn StorageBackend>,
}

impl ResultStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Record a fresh result as the sole pending entry, stamped with the
    /// local time. An unpromoted prior entry is overwritten: pending means
    /// "most recent", not "first".
    pub fn set_pending(&mut self, result: AnalysisResult) {
        let entry = HistoryEntry::new(result);
        self.write_slot(PENDING_SLOT, &entry);
    }

    /// The startup restore path reads this; nothing else does.
    pub fn get_pending(&self) -> Option<HistoryEntry> {
        self.read_slot(PENDING_SLOT)
    }

    pub fn get_history(&self) -> Vec<HistoryEntry> {
        self.read_slot(HISTORY_SLOT).unwrap_or_default()
    }

    /// Move the pending entry (if any) to the end of the history log and
    /// clear the pending slot. Called once per history-view activation,
    /// before that view renders. With no pending entry this is a no-op
    /// returning the current history, so repeated activations cannot
    /// duplicate an entry.
    pub fn promote_pending_to_history(&mut self) -> Vec<HistoryEntry> {
        let mut history = self.get_history();

        if let Some(entry) = self.get_pending() {
            history.push(entry);
            self.write_slot(HISTORY_SLOT, &history);
        }
        // Clear the slot even if it held an unparseable blob, so a corrupt
        // pending entry cannot shadow the slot forever.
        if let Err(e) = self.backend.remove(PENDING_SLOT) {
            warn!(slot = PENDING_SLOT, error = %e, "failed to clear pending slot");
        }

        history
    }

    /// Erase pending and history irrecoverably. The call site is expected
    /// to have confirmed with the user first.
    pub fn clear_all(&mut self) {
        for slot in [PENDING_SLOT, HISTORY_SLOT] {
            if let Err(e) = self.backend.remove(slot) {
                warn!(slot, error = %e, "failed to clear slot");
            }
        }
    }

    fn read_slot<T: serde::de::DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let content = match self.backend.read(slot) {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                warn!(slot, error = %e, "storage read failed, treating slot as absent");
                return None;
            }
        };

        match ron::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(slot, error = %e, "stored content failed to parse, treating slot as absent");
                None
            }
        }
    }

    fn write_slot<T: serde::Serialize>(&mut self, slot: &str, value: &T) {
        let content = match ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::new()) {
            Ok(content) => content,
            Err(e) => {
                warn!(slot, error = %e, "failed to serialize slot content");
                return;
            }
        };

        if let Err(e) = self.backend.write(slot, &content) {
            warn!(slot, error = %e, "storage write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sentiment, SentimentCounts, ExampleItem};

    fn sample_result(overall: Sentiment) -> AnalysisResult {
        AnalysisResult {
            overall,
            counts: SentimentCounts { positive: 1, neutral: 0, negative: 1 },
            top_positive: vec![ExampleItem { text: "I love this!".into() }],
            top_negative: vec![ExampleItem { text: "I hate this.".into() }],
        }
    }

    fn store() -> ResultStore {
        ResultStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn promote_moves_pending_to_end_of_history() {
        let mut store = store();
        let result = sample_result(Sentiment::Neutral);

        store.set_pending(result.clone());
        let history = store.promote_pending_to_history();

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().result, result);
        assert!(store.get_pending().is_none());
    }

    #[test]
    fn promote_without_pending_is_idempotent() {
        let mut store = store();
        store.set_pending(sample_result(Sentiment::Positive));

        let first = store.promote_pending_to_history();
        let second = store.promote_pending_to_history();

        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn second_set_pending_overwrites_the_first() {
        let mut store = store();
        store.set_pending(sample_result(Sentiment::Positive));
        store.set_pending(sample_result(Sentiment::Negative));

        let history = store.promote_pending_to_history();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].result.overall, Sentiment::Negative);
    }

    #[test]
    fn history_accumulates_in_chronological_order() {
        let mut store = store();

        store.set_pending(sample_result(Sentiment::Positive));
        store.promote_pending_to_history();
        store.set_pending(sample_result(Sentiment::Negative));
        let history = store.promote_pending_to_history();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].result.overall, Sentiment::Positive);
        assert_eq!(history[1].result.overall, Sentiment::Negative);
    }

    #[test]
    fn clear_all_empties_both_slots() {
        let mut store = store();
        store.set_pending(sample_result(Sentiment::Neutral));
        store.promote_pending_to_history();
        store.set_pending(sample_result(Sentiment::Neutral));

        store.clear_all();

        assert!(store.get_history().is_empty());
        assert!(store.get_pending().is_none());
    }

    #[test]
    fn corrupt_history_degrades_to_empty() {
        let mut backend = MemoryStorage::new();
        backend.write(HISTORY_SLOT, "not valid ron {{{").unwrap();
        let store = ResultStore::new(Box::new(backend));

        assert!(store.get_history().is_empty());
    }

    #[test]
    fn corrupt_pending_does_not_block_promotion() {
        let mut backend = MemoryStorage::new();
        backend.write(PENDING_SLOT, "garbage").unwrap();
        let mut store = ResultStore::new(Box::new(backend));

        let history = store.promote_pending_to_history();

        assert!(history.is_empty());
        // The corrupt blob is dropped rather than left to shadow the slot.
        assert!(store.get_pending().is_none());
        store.set_pending(sample_result(Sentiment::Neutral));
        assert_eq!(store.promote_pending_to_history().len(), 1);
    }

    #[test]
    fn pending_round_trips_through_serialization() {
        let mut store = store();
        let result = sample_result(Sentiment::Negative);

        store.set_pending(result.clone());
        let pending = store.get_pending().expect("pending entry");

        assert_eq!(pending.result, result);
        assert!(!pending.timestamp.is_empty());
    }
}
