//! Round generation: one self-contained puzzle per call.
//!
//! The generator holds tuning only; every draw comes from the rng the
//! caller passes in, so a seeded rng reproduces a session exactly.

use crate::answer::{anagram_equal, letters_equal, words_equal};
use crate::catalog::Catalog;
use crate::distractors::{entry_distractors, letter_distractors};
use crate::hebrew::{random_letter, split_word};
use crate::shuffle::shuffled;
use crate::types::{DrillSettings, Entry, GameMode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One draggable letter in an anagram round.
///
/// The id is positional after the final shuffle and stays stable for
/// the life of the round; `used` is client bookkeeping for tiles moved
/// into the answer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub id: String,
    pub letter: char,
    pub used: bool,
}

/// What the player picks from, per mode.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOptions {
    /// Typed answer, nothing to pick.
    None,
    /// Letter buttons for letter-choice.
    Letters(Vec<char>),
    /// Whole entries for word-choice.
    Entries(Vec<Entry>),
    /// Tiles to assemble for anagram.
    Tiles(Vec<LetterTile>),
}

/// A single puzzle plus its answer bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub mode: GameMode,
    pub entry: Entry,
    /// Index of the hidden letter for the letter modes.
    pub hidden_position: Option<usize>,
    pub options: RoundOptions,
    /// Most recent submission, verbatim.
    pub selected: Option<String>,
    pub attempts: u32,
    pub resolved: bool,
}

impl Round {
    fn new(
        mode: GameMode,
        entry: Entry,
        hidden_position: Option<usize>,
        options: RoundOptions,
    ) -> Self {
        Self {
            mode,
            entry,
            hidden_position,
            options,
            selected: None,
            attempts: 0,
            resolved: false,
        }
    }

    /// The letter the round hides, if it hides one.
    pub fn hidden_letter(&self) -> Option<char> {
        let position = self.hidden_position?;
        self.entry.letters().get(position).copied()
    }

    /// The word with the hidden position masked: `ש _ ו ם`.
    ///
    /// Without a hidden position this is the word spaced out letter by
    /// letter.
    pub fn masked_text(&self) -> String {
        match self.hidden_position {
            Some(position) => word_with_gap(&self.entry.hebrew, position, "_"),
            None => split_word(&self.entry.hebrew)
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Evaluate a submission against this round.
    ///
    /// Letter modes compare letters, word-choice compares the picked
    /// option id, word-input compares the whole word. Every call counts
    /// as an attempt; a correct one resolves the round.
    pub fn submit(&mut self, answer: &str) -> bool {
        let correct = match self.mode {
            GameMode::LetterChoice | GameMode::LetterInput => match self.hidden_letter() {
                Some(hidden) => letters_equal(answer, &hidden.to_string()),
                None => false,
            },
            GameMode::WordChoice => answer == self.entry.id,
            GameMode::WordInput => words_equal(answer, &self.entry.hebrew),
            GameMode::Anagram | GameMode::Matching | GameMode::Speed => false,
        };
        self.note_attempt(answer.to_string(), correct);
        correct
    }

    /// Evaluate an assembled anagram selection.
    pub fn submit_anagram(&mut self, selected: &[char]) -> bool {
        let correct = self.mode == GameMode::Anagram && anagram_equal(selected, &self.entry.hebrew);
        self.note_attempt(String::from_iter(selected.iter()), correct);
        correct
    }

    fn note_attempt(&mut self, answer: String, correct: bool) {
        self.attempts += 1;
        self.selected = Some(answer);
        if correct {
            self.resolved = true;
        }
    }
}

/// Stateless round factory configured with [`DrillSettings`].
#[derive(Debug, Clone)]
pub struct RoundGenerator {
    settings: DrillSettings,
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self::new(DrillSettings::default())
    }
}

impl RoundGenerator {
    pub fn new(settings: DrillSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    /// Generate a round for the given mode.
    ///
    /// `Matching` runs on a [`crate::matching::MatchingBoard`] and
    /// `Speed` is reserved, so neither yields a round here. An empty
    /// catalog yields `None` for every mode.
    pub fn round<R: Rng + ?Sized>(
        &self,
        mode: GameMode,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<Round> {
        match mode {
            GameMode::LetterChoice => self.letter_choice_round(catalog, rng),
            GameMode::LetterInput => self.letter_input_round(catalog, rng),
            GameMode::WordChoice => self.word_choice_round(catalog, rng),
            GameMode::WordInput => self.word_input_round(catalog, rng),
            GameMode::Anagram => self.anagram_round(catalog, rng),
            GameMode::Matching | GameMode::Speed => None,
        }
    }

    /// Hidden letter with picks: `[letter_options_min, letter_options_max]`
    /// options including the hidden letter itself.
    pub fn letter_choice_round<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<Round> {
        let (entry, position, hidden) = self.pick_hidden(catalog, rng)?;
        let lo = self.settings.letter_options_min;
        let hi = self.settings.letter_options_max.max(lo);
        let option_count = rng.random_range(lo..=hi);

        let mut options = vec![hidden];
        for letter in letter_distractors(rng, hidden, &entry.hebrew, option_count.saturating_sub(1))
        {
            if !options.contains(&letter) {
                options.push(letter);
            }
        }
        let options = shuffled(&options, rng);

        Some(Round::new(
            GameMode::LetterChoice,
            entry,
            Some(position),
            RoundOptions::Letters(options),
        ))
    }

    /// Hidden letter, typed answer.
    pub fn letter_input_round<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<Round> {
        let (entry, position, _) = self.pick_hidden(catalog, rng)?;
        Some(Round::new(
            GameMode::LetterInput,
            entry,
            Some(position),
            RoundOptions::None,
        ))
    }

    /// Pick the word for the pictograph out of 3-4 candidates.
    pub fn word_choice_round<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<Round> {
        let entry = catalog.random_entry(rng, &HashSet::new())?.clone();
        let lo = self.settings.word_distractors_min;
        let hi = self.settings.word_distractors_max.max(lo);
        let distractor_count = rng.random_range(lo..=hi);

        let mut options = vec![entry.clone()];
        options.extend(
            entry_distractors(rng, &entry, catalog.entries(), distractor_count)
                .into_iter()
                .cloned(),
        );
        let options = shuffled(&options, rng);

        Some(Round::new(
            GameMode::WordChoice,
            entry,
            None,
            RoundOptions::Entries(options),
        ))
    }

    /// Type the whole word for the pictograph.
    pub fn word_input_round<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<Round> {
        let entry = catalog.random_entry(rng, &HashSet::new())?.clone();
        Some(Round::new(
            GameMode::WordInput,
            entry,
            None,
            RoundOptions::None,
        ))
    }

    /// Word letters shuffled into tiles, plus extra letters that do not
    /// occur in the word.
    pub fn anagram_round<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<Round> {
        let entry = catalog.random_entry(rng, &HashSet::new())?.clone();
        let letters = entry.letters();

        let mut tiles = shuffled(&letters, rng);
        let mut present = letters;
        for _ in 0..self.settings.anagram_distractors {
            match random_letter(rng, &present) {
                Some(letter) => {
                    tiles.push(letter);
                    present.push(letter);
                }
                None => break,
            }
        }

        let tiles = shuffled(&tiles, rng)
            .into_iter()
            .enumerate()
            .map(|(index, letter)| LetterTile {
                id: format!("letter-{}", index),
                letter,
                used: false,
            })
            .collect();

        Some(Round::new(
            GameMode::Anagram,
            entry,
            None,
            RoundOptions::Tiles(tiles),
        ))
    }

    fn pick_hidden<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<(Entry, usize, char)> {
        let entry = catalog.random_entry(rng, &HashSet::new())?.clone();
        let letters = entry.letters();
        // Catalog validation rejects empty words, so there is a letter.
        let position = rng.random_range(0..letters.len());
        let hidden = *letters.get(position)?;
        Some((entry, position, hidden))
    }
}

/// The word with one position replaced by `placeholder`, space-joined.
pub fn word_with_gap(word: &str, position: usize, placeholder: &str) -> String {
    split_word(word)
        .iter()
        .enumerate()
        .map(|(index, letter)| {
            if index == position {
                placeholder.to_string()
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The word with only the letters at `revealed` positions shown: `ש _ ו _`.
pub fn placeholders(word: &str, revealed: &[usize]) -> String {
    split_word(word)
        .iter()
        .enumerate()
        .map(|(index, letter)| {
            if revealed.contains(&index) {
                letter.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First letter of the word, the standard hint.
pub fn hint(word: &str) -> Option<char> {
    word.trim().chars().next()
}
