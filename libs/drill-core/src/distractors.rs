//! Wrong-answer synthesis for choice rounds.
//!
//! Letter distractors prefer visually confusable letters, then the other
//! letters of the word being drilled, then random alphabet draws. Entry
//! distractors prefer the correct entry's category before widening to
//! the rest of the catalog.

use crate::hebrew::{normalize_final, random_letter, similar_letters};
use crate::shuffle::shuffled;
use crate::types::Entry;
use rand::Rng;

/// Up to `count` wrong letters for a round hiding `correct` inside `word`.
///
/// Every returned letter is a base form, distinct from the others and
/// from `correct`. When the whole alphabet cannot fill `count`, the
/// result is shorter; that is the caller's signal, not an error.
pub fn letter_distractors<R: Rng + ?Sized>(
    rng: &mut R,
    correct: char,
    word: &str,
    count: usize,
) -> Vec<char> {
    let correct = normalize_final(correct);
    let mut picked: Vec<char> = Vec::with_capacity(count);

    for &candidate in similar_letters(correct) {
        let candidate = normalize_final(candidate);
        if candidate != correct && !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    if picked.len() < count {
        for letter in word.trim().chars() {
            if letter.is_whitespace() {
                continue;
            }
            let letter = normalize_final(letter);
            if letter != correct && !picked.contains(&letter) {
                picked.push(letter);
            }
        }
    }

    let mut exclude = picked.clone();
    exclude.push(correct);
    let mut draws = 0;
    while picked.len() < count && draws < 50 {
        draws += 1;
        match random_letter(rng, &exclude) {
            Some(letter) => {
                picked.push(letter);
                exclude.push(letter);
            }
            None => break,
        }
    }

    picked.truncate(count);
    picked
}

/// Up to `count` wrong entries to show next to `correct`.
///
/// Same-category entries fill the pool first; only when they cannot
/// cover `count` does the rest of the slice join. The pool is shuffled
/// before truncation so the widening does not bias positions.
pub fn entry_distractors<'a, R: Rng + ?Sized>(
    rng: &mut R,
    correct: &Entry,
    entries: &'a [Entry],
    count: usize,
) -> Vec<&'a Entry> {
    let mut pool: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.id != correct.id && e.category == correct.category)
        .collect();
    if pool.len() < count {
        pool.extend(
            entries
                .iter()
                .filter(|e| e.id != correct.id && e.category != correct.category),
        );
    }

    let mut out = shuffled(&pool, rng);
    out.truncate(count);
    out
}
