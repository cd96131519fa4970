//! Core types for the vocabulary drill engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// One vocabulary item.
///
/// Entries are created once when the catalog loads and never mutated.
/// Field names serialize in camelCase so the catalog JSON (`words.json`
/// format) deserializes without adaptation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique id within the catalog.
    pub id: String,
    /// Pictograph shown alongside the word.
    pub emoji: String,
    /// The word in Hebrew script.
    pub hebrew: String,
    /// Native-language gloss.
    pub russian: String,
    /// Latin transliteration.
    pub transliteration: String,
    /// Free-form grouping tag (food, animals, transport, ...).
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<u32>,
}

impl Entry {
    /// Letters of the Hebrew word, trimmed.
    pub fn letters(&self) -> Vec<char> {
        self.hebrew.trim().chars().collect()
    }
}

/// Entry difficulty tier, stored as 1-3 in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Convert to the 1-3 catalog value.
    pub fn to_value(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    /// Create from the 1-3 catalog value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Beginner),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("difficulty out of range: {}", value))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.to_value()
    }
}

/// Game mode.
///
/// Serialized in kebab-case because mode names key the persisted score
/// mapping. `Speed` is reserved: it appears in stored stats but has no
/// round generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Pick the hidden letter from options.
    LetterChoice,
    /// Type the hidden letter.
    LetterInput,
    /// Pick the word matching the pictograph.
    WordChoice,
    /// Type the whole word.
    WordInput,
    /// Assemble the word from shuffled letter tiles.
    Anagram,
    /// Match pictographs to words.
    Matching,
    /// Reserved yes/no quiz mode.
    Speed,
}

impl GameMode {
    /// Get the mode name as used in persisted stats.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LetterChoice => "letter-choice",
            Self::LetterInput => "letter-input",
            Self::WordChoice => "word-choice",
            Self::WordInput => "word-input",
            Self::Anagram => "anagram",
            Self::Matching => "matching",
            Self::Speed => "speed",
        }
    }

    /// Parse from the persisted mode name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "letter-choice" => Some(Self::LetterChoice),
            "letter-input" => Some(Self::LetterInput),
            "word-choice" => Some(Self::WordChoice),
            "word-input" => Some(Self::WordInput),
            "anagram" => Some(Self::Anagram),
            "matching" => Some(Self::Matching),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }
}

/// Accumulated answers for one mode.
///
/// The percentage is stored alongside the counters because the persisted
/// blob carries it; [`crate::score::percentage`] keeps it consistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub correct: u32,
    pub total: u32,
    pub percentage: u8,
}

impl ScoreRecord {
    /// Fold one answered round into the record.
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
        self.percentage = crate::score::percentage(self.correct, self.total);
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "✓ {} / {} ({}%)", self.correct, self.total, self.percentage)
    }
}

/// Persisted statistics: one record per played mode plus the timestamp of
/// the last answered round.
///
/// Serializes to a single flat JSON object keyed by mode name, matching
/// the stored format:
/// `{"letter-choice":{"correct":1,"total":3,"percentage":33},"lastSession":"..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(flatten)]
    pub modes: BTreeMap<GameMode, ScoreRecord>,
    #[serde(rename = "lastSession", skip_serializing_if = "Option::is_none")]
    pub last_session: Option<DateTime<Utc>>,
}

/// Tunable drill parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSettings {
    /// Smallest option set for letter-choice rounds (correct letter included).
    pub letter_options_min: usize,
    /// Largest option set for letter-choice rounds.
    pub letter_options_max: usize,
    /// Smallest distractor count for word-choice rounds.
    pub word_distractors_min: usize,
    /// Largest distractor count for word-choice rounds.
    pub word_distractors_max: usize,
    /// Extra letters mixed into anagram tiles.
    pub anagram_distractors: usize,
    /// Pairs per matching board.
    pub matching_pairs: usize,
    /// How long a wrong pair stays highlighted.
    pub misfire_ttl_ms: u64,
    /// Delay before advancing past a solved round.
    pub auto_advance_ms: u64,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            letter_options_min: 4,
            letter_options_max: 6,
            word_distractors_min: 2,
            word_distractors_max: 3,
            anagram_distractors: 2,
            matching_pairs: 3,
            misfire_ttl_ms: 1000,
            auto_advance_ms: 1000,
        }
    }
}

impl DrillSettings {
    pub fn misfire_ttl(&self) -> Duration {
        Duration::from_millis(self.misfire_ttl_ms)
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}
