//! Two-column matching board.
//!
//! Left tiles show pictographs in draw order, right tiles the words in
//! shuffled order. Selecting one id per side resolves the pair in the
//! same call and reports the outcome; wrong pairs are remembered as
//! misfires until the embedder expires them.

use crate::catalog::Catalog;
use crate::shuffle::shuffled;
use crate::types::Entry;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One face of a pair. The same id appears once per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub emoji: String,
    pub word: String,
    pub matched: bool,
}

impl Tile {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            emoji: entry.emoji.clone(),
            word: entry.hebrew.clone(),
            matched: false,
        }
    }
}

/// What a selection resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Both selections named the same entry.
    Matched { id: String },
    /// Wrong pair; `pair_key` identifies the misfire until it expires.
    Mismatched { pair_key: String },
}

/// State machine for one matching puzzle.
#[derive(Debug, Clone)]
pub struct MatchingBoard {
    left: Vec<Tile>,
    right: Vec<Tile>,
    selected_left: Option<String>,
    selected_right: Option<String>,
    matches: HashMap<String, String>,
    misfires: HashSet<String>,
    pair_count: usize,
}

impl MatchingBoard {
    /// Draw `pair_count` distinct entries and lay out both columns.
    ///
    /// A smaller catalog yields a smaller board; an empty one yields an
    /// empty board that is never complete.
    pub fn new<R: Rng + ?Sized>(catalog: &Catalog, pair_count: usize, rng: &mut R) -> Self {
        let mut drawn: Vec<Entry> = Vec::new();
        let mut exclude: HashSet<String> = HashSet::new();
        while drawn.len() < pair_count {
            match catalog.random_entry(rng, &exclude) {
                Some(entry) => {
                    exclude.insert(entry.id.clone());
                    drawn.push(entry.clone());
                }
                None => break,
            }
        }

        let left: Vec<Tile> = drawn.iter().map(Tile::from_entry).collect();
        let right = shuffled(&left, rng);

        Self {
            left,
            right,
            selected_left: None,
            selected_right: None,
            matches: HashMap::new(),
            misfires: HashSet::new(),
            pair_count,
        }
    }

    /// Select a left tile. Resolves the pair when a right tile is
    /// already pending.
    ///
    /// Ignored for matched or unknown ids; re-selecting the pending id
    /// deselects it. `None` means no pair resolved on this call.
    pub fn select_left(&mut self, id: &str) -> Option<MatchOutcome> {
        if self.matches.contains_key(id) || !self.left.iter().any(|t| t.id == id) {
            return None;
        }
        if self.selected_left.as_deref() == Some(id) {
            self.selected_left = None;
            return None;
        }
        self.selected_left = Some(id.to_string());
        self.try_resolve()
    }

    /// Select a right tile. Mirror of [`Self::select_left`].
    pub fn select_right(&mut self, id: &str) -> Option<MatchOutcome> {
        if self.matches.values().any(|v| v == id) || !self.right.iter().any(|t| t.id == id) {
            return None;
        }
        if self.selected_right.as_deref() == Some(id) {
            self.selected_right = None;
            return None;
        }
        self.selected_right = Some(id.to_string());
        self.try_resolve()
    }

    fn try_resolve(&mut self) -> Option<MatchOutcome> {
        let (left, right) = match (&self.selected_left, &self.selected_right) {
            (Some(left), Some(right)) => (left.clone(), right.clone()),
            _ => return None,
        };
        self.selected_left = None;
        self.selected_right = None;

        if left == right {
            for tile in self.left.iter_mut().chain(self.right.iter_mut()) {
                if tile.id == left {
                    tile.matched = true;
                }
            }
            self.matches.insert(left.clone(), right);
            Some(MatchOutcome::Matched { id: left })
        } else {
            let pair_key = format!("{}-{}", left, right);
            self.misfires.insert(pair_key.clone());
            Some(MatchOutcome::Mismatched { pair_key })
        }
    }

    /// Drop an expired misfire key. Returns whether it was present.
    pub fn clear_misfire(&mut self, pair_key: &str) -> bool {
        self.misfires.remove(pair_key)
    }

    /// Whether every pair on the board is matched.
    pub fn is_complete(&self) -> bool {
        !self.left.is_empty() && self.matches.len() == self.left.len()
    }

    /// Replace the board with a fresh draw of the same size.
    pub fn reset<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        *self = Self::new(catalog, self.pair_count, rng);
    }

    pub fn left(&self) -> &[Tile] {
        &self.left
    }

    pub fn right(&self) -> &[Tile] {
        &self.right
    }

    pub fn selected_left(&self) -> Option<&str> {
        self.selected_left.as_deref()
    }

    pub fn selected_right(&self) -> Option<&str> {
        self.selected_right.as_deref()
    }

    pub fn matches(&self) -> &HashMap<String, String> {
        &self.matches
    }

    pub fn misfires(&self) -> &HashSet<String> {
        &self.misfires
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }
}
