//! Vocabulary catalog: loading, validation and filtered selection.
//!
//! # Format
//!
//! The catalog loads from a JSON array of entries:
//!
//! ```json
//! [
//!   {
//!     "id": "apple",
//!     "emoji": "🍎",
//!     "hebrew": "תפוח",
//!     "russian": "яблоко",
//!     "transliteration": "tapuach",
//!     "category": "food",
//!     "difficulty": 1
//!   }
//! ]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::{Difficulty, Entry};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Immutable collection of vocabulary entries.
///
/// Construction validates the data once; every query after that is total
/// and reports "nothing available" with an empty result or `None`.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and empty Hebrew words.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
            if entry.hebrew.trim().is_empty() {
                return Err(CatalogError::EmptyWord {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from the JSON array format.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        let catalog = Self::new(entries)?;
        tracing::debug!(entries = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Draw a uniformly random entry whose id is not in `exclude`.
    ///
    /// Returns `None` when every entry is excluded, including on an empty
    /// catalog.
    pub fn random_entry<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        exclude: &HashSet<String>,
    ) -> Option<&Entry> {
        let pool: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| !exclude.contains(&e.id))
            .collect();
        pool.choose(rng).copied()
    }

    /// Entries in the given category, in catalog order.
    pub fn by_category(&self, category: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Entries at the given difficulty, in catalog order.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .collect()
    }

    /// Entries whose category is in the given set, in catalog order.
    ///
    /// An empty set selects nothing: "no categories chosen" means no
    /// entries, not all of them.
    pub fn by_categories(&self, categories: &HashSet<String>) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| categories.contains(&e.category))
            .collect()
    }

    /// Every category present in the catalog.
    pub fn categories(&self) -> HashSet<&str> {
        self.entries.iter().map(|e| e.category.as_str()).collect()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
