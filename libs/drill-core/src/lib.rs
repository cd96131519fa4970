//! Core vocabulary-drill library for Hebrew learning applications.
//!
//! Provides:
//! - Hebrew script utilities (final forms, similarity, validation)
//! - Vocabulary catalog with filtered and random selection
//! - Round generation with script-aware distractor synthesis
//! - Answer evaluation under final-form normalization
//! - Two-column matching board state machine
//! - Score ledger over an injected key-value store
//! - Deferred transitions over an injected timer capability

pub mod answer;
pub mod catalog;
pub mod distractors;
pub mod error;
pub mod hebrew;
pub mod matching;
pub mod round;
pub mod schedule;
pub mod score;
pub mod shuffle;
pub mod types;

pub use answer::{anagram_equal, letters_equal, words_equal};
pub use catalog::Catalog;
pub use distractors::{entry_distractors, letter_distractors};
pub use error::{CatalogError, Result, StoreError};
pub use hebrew::{
    contains_letter, is_hebrew, normalize_final, normalize_finals, random_letter,
    similar_letters, split_word, ALPHABET,
};
pub use matching::{MatchOutcome, MatchingBoard, Tile};
pub use round::{hint, placeholders, word_with_gap, LetterTile, Round, RoundGenerator, RoundOptions};
pub use schedule::{DeferredAction, ManualHandle, ManualScheduler, Scheduler, TimerHandle};
pub use score::{percentage, KeyValueStore, MemoryStore, ScoreLedger, STORAGE_KEY};
pub use shuffle::shuffled;
pub use types::{Difficulty, DrillSettings, Entry, GameMode, GameStats, ScoreRecord};
