//! Shared fixtures for drill-core integration tests.

use drill_core::{Catalog, Difficulty, Entry};

/// Create a vocabulary entry with the given coordinates.
pub fn entry(
    id: &str,
    emoji: &str,
    hebrew: &str,
    russian: &str,
    transliteration: &str,
    category: &str,
    difficulty: Difficulty,
) -> Entry {
    Entry {
        id: id.to_string(),
        emoji: emoji.to_string(),
        hebrew: hebrew.to_string(),
        russian: russian.to_string(),
        transliteration: transliteration.to_string(),
        category: category.to_string(),
        difficulty,
        audio_url: None,
        frequency_rank: None,
    }
}

/// A small catalog spanning several categories and difficulties.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry("shalom", "👋", "שלום", "привет", "shalom", "greetings", Difficulty::Beginner),
        entry("mayim", "💧", "מים", "вода", "mayim", "food", Difficulty::Beginner),
        entry("lechem", "🍞", "לחם", "хлеб", "lechem", "food", Difficulty::Beginner),
        entry("tapuach", "🍎", "תפוח", "яблоко", "tapuach", "food", Difficulty::Beginner),
        entry("kelev", "🐕", "כלב", "собака", "kelev", "animals", Difficulty::Intermediate),
        entry("chatul", "🐈", "חתול", "кошка", "chatul", "animals", Difficulty::Beginner),
        entry("bayit", "🏠", "בית", "дом", "bayit", "home", Difficulty::Intermediate),
        entry("sefer", "📖", "ספר", "книга", "sefer", "home", Difficulty::Advanced),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_entries()).unwrap()
}

/// The same catalog in the `words.json` wire format.
pub fn sample_json() -> String {
    serde_json::to_string(&sample_entries()).unwrap()
}
