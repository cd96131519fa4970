//! Score ledger over an injected key-value store.
//!
//! In-memory state is authoritative. The store is best effort: a store
//! that cannot be read starts the ledger fresh, a store that cannot be
//! written is logged and ignored, and play continues either way.

use crate::error::StoreError;
use crate::types::{GameMode, GameStats, ScoreRecord};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Key the stats blob persists under.
pub const STORAGE_KEY: &str = "hebrew-train-stats";

/// The persistence capability the embedding layer injects.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and embedders without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Lifetime statistics per mode plus volatile session counters.
#[derive(Debug)]
pub struct ScoreLedger<S: KeyValueStore> {
    store: S,
    stats: GameStats,
    session_correct: u32,
    session_total: u32,
}

impl<S: KeyValueStore> ScoreLedger<S> {
    /// Load persisted stats from the store, starting fresh when the
    /// blob is missing, unreadable or unparsable.
    pub fn new(store: S) -> Self {
        let stats = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(stats) => stats,
                Err(error) => {
                    tracing::warn!(%error, "stored stats unreadable, starting fresh");
                    GameStats::default()
                }
            },
            Ok(None) => GameStats::default(),
            Err(error) => {
                tracing::warn!(%error, "stats store unavailable, starting fresh");
                GameStats::default()
            }
        };
        Self {
            store,
            stats,
            session_correct: 0,
            session_total: 0,
        }
    }

    /// Count a correct answer for the mode at the given instant.
    pub fn record_correct(&mut self, mode: GameMode, now: DateTime<Utc>) {
        self.record(mode, true, now);
    }

    /// Count a wrong answer for the mode at the given instant.
    pub fn record_incorrect(&mut self, mode: GameMode, now: DateTime<Utc>) {
        self.record(mode, false, now);
    }

    fn record(&mut self, mode: GameMode, correct: bool, now: DateTime<Utc>) {
        self.stats.modes.entry(mode).or_default().record(correct);
        self.stats.last_session = Some(now);
        self.session_total += 1;
        if correct {
            self.session_correct += 1;
        }
        self.persist();
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.stats) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "stats not serializable, keeping in memory only");
                return;
            }
        };
        if let Err(error) = self.store.set(STORAGE_KEY, &blob) {
            tracing::warn!(%error, "stats not persisted, keeping in memory only");
        }
    }

    /// Lifetime record for one mode; zero record when never played.
    pub fn mode_stats(&self, mode: GameMode) -> ScoreRecord {
        self.stats.modes.get(&mode).copied().unwrap_or_default()
    }

    /// Lifetime record aggregated across every mode.
    pub fn total_stats(&self) -> ScoreRecord {
        let correct = self.stats.modes.values().map(|r| r.correct).sum();
        let total = self.stats.modes.values().map(|r| r.total).sum();
        ScoreRecord {
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }

    /// Volatile `(correct, total)` counters since the last session reset.
    pub fn session(&self) -> (u32, u32) {
        (self.session_correct, self.session_total)
    }

    pub fn session_percentage(&self) -> u8 {
        percentage(self.session_correct, self.session_total)
    }

    pub fn last_session(&self) -> Option<DateTime<Utc>> {
        self.stats.last_session
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Zero the session counters; lifetime stats stay.
    pub fn reset_session(&mut self) {
        self.session_correct = 0;
        self.session_total = 0;
    }

    /// Drop the lifetime record of one mode.
    pub fn reset_mode(&mut self, mode: GameMode) {
        self.stats.modes.remove(&mode);
        self.persist();
    }

    /// Drop everything, session counters included.
    pub fn reset_all(&mut self) {
        self.stats = GameStats::default();
        self.reset_session();
        self.persist();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Whole-number success rate, rounded half up. 0 when nothing answered.
pub fn percentage(correct: u32, total: u32) -> u8 {
    if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::new("read refused"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::new("write refused"))
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(999, 1000), 100);
    }

    #[test]
    fn records_accumulate_per_mode() {
        let mut ledger = ScoreLedger::new(MemoryStore::new());
        ledger.record_correct(GameMode::LetterChoice, noon());
        ledger.record_incorrect(GameMode::LetterChoice, noon());
        ledger.record_incorrect(GameMode::LetterChoice, noon());

        let record = ledger.mode_stats(GameMode::LetterChoice);
        assert_eq!(record.correct, 1);
        assert_eq!(record.total, 3);
        assert_eq!(record.percentage, 33);

        assert_eq!(ledger.session(), (1, 3));
        assert_eq!(ledger.session_percentage(), 33);
        assert_eq!(ledger.last_session(), Some(noon()));
        assert_eq!(ledger.mode_stats(GameMode::Anagram), ScoreRecord::default());
    }

    #[test]
    fn stats_survive_a_reload_from_the_same_store() {
        let mut ledger = ScoreLedger::new(MemoryStore::new());
        ledger.record_correct(GameMode::WordChoice, noon());
        ledger.record_correct(GameMode::Anagram, noon());

        let reloaded = ScoreLedger::new(ledger.into_store());
        assert_eq!(reloaded.mode_stats(GameMode::WordChoice).correct, 1);
        assert_eq!(reloaded.mode_stats(GameMode::Anagram).total, 1);
        assert_eq!(reloaded.last_session(), Some(noon()));
        assert_eq!(reloaded.session(), (0, 0));
    }

    #[test]
    fn persisted_blob_is_a_flat_mode_map() {
        let mut ledger = ScoreLedger::new(MemoryStore::new());
        ledger.record_correct(GameMode::LetterChoice, noon());

        let raw = ledger.store().get(STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["letter-choice"]["correct"], 1);
        assert_eq!(json["letter-choice"]["percentage"], 100);
        assert_eq!(json["lastSession"], "2024-11-02T12:00:00Z");
    }

    #[test]
    fn corrupt_blob_starts_fresh() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{ not stats").unwrap();
        let ledger = ScoreLedger::new(store);
        assert_eq!(ledger.total_stats(), ScoreRecord::default());
    }

    #[test]
    fn failing_store_never_loses_in_memory_state() {
        let mut ledger = ScoreLedger::new(FailingStore);
        ledger.record_correct(GameMode::Matching, noon());
        ledger.record_incorrect(GameMode::Matching, noon());
        assert_eq!(ledger.mode_stats(GameMode::Matching).total, 2);
        assert_eq!(ledger.session(), (1, 2));
    }

    #[test]
    fn total_stats_aggregate_across_modes() {
        let mut ledger = ScoreLedger::new(MemoryStore::new());
        ledger.record_correct(GameMode::LetterChoice, noon());
        ledger.record_correct(GameMode::WordInput, noon());
        ledger.record_incorrect(GameMode::WordInput, noon());

        let total = ledger.total_stats();
        assert_eq!(total.correct, 2);
        assert_eq!(total.total, 3);
        assert_eq!(total.percentage, 67);
    }

    #[test]
    fn resets_are_scoped() {
        let mut ledger = ScoreLedger::new(MemoryStore::new());
        ledger.record_correct(GameMode::LetterChoice, noon());
        ledger.record_correct(GameMode::WordInput, noon());

        ledger.reset_session();
        assert_eq!(ledger.session(), (0, 0));
        assert_eq!(ledger.total_stats().total, 2);

        ledger.reset_mode(GameMode::LetterChoice);
        assert_eq!(ledger.mode_stats(GameMode::LetterChoice).total, 0);
        assert_eq!(ledger.mode_stats(GameMode::WordInput).total, 1);

        ledger.reset_all();
        assert_eq!(ledger.total_stats(), ScoreRecord::default());
        assert!(ledger.last_session().is_none());

        let reloaded = ScoreLedger::new(ledger.into_store());
        assert_eq!(reloaded.total_stats(), ScoreRecord::default());
    }
}
