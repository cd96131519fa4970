//! Hebrew script utilities.
//!
//! Provides:
//! - Alphabet and final-form normalization
//! - Script detection for input validation
//! - Visual-similarity lookup used when picking letter distractors

use rand::seq::IndexedRandom;
use rand::Rng;

/// The 22 base letters of the Hebrew alphabet, in alphabetical order.
/// Final forms are not listed; they normalize to their base letter.
pub const ALPHABET: [char; 22] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ',
    'ק', 'ר', 'ש', 'ת',
];

/// Five letters take a different shape at the end of a word.
/// Comparisons treat both shapes as the same letter.
pub fn normalize_final(letter: char) -> char {
    match letter {
        'ך' => 'כ',
        'ם' => 'מ',
        'ן' => 'נ',
        'ף' => 'פ',
        'ץ' => 'צ',
        other => other,
    }
}

/// Normalize every final form in a string to its base letter.
pub fn normalize_finals(text: &str) -> String {
    text.chars().map(normalize_final).collect()
}

/// Whether the text contains only Hebrew letters and whitespace.
///
/// Empty text passes: validation of emptiness belongs to the caller.
pub fn is_hebrew(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\u{0590}'..='\u{05FF}').contains(&c))
}

/// Letters that beginners commonly confuse with the given one.
///
/// The input is normalized first, so a final form shares its base
/// letter's row. Rows may themselves contain final forms; callers that
/// compare letters must normalize what they take from here.
pub fn similar_letters(letter: char) -> &'static [char] {
    match normalize_final(letter) {
        'ד' => &['ר', 'ה', 'ת'],
        'ר' => &['ד', 'ה', 'ת'],
        'ב' => &['כ', 'נ', 'מ'],
        'כ' => &['ב', 'נ', 'מ'],
        'ה' => &['ח', 'ת', 'ד'],
        'ח' => &['ה', 'ת'],
        'ת' => &['ה', 'ח', 'ד'],
        'ו' => &['ז', 'י'],
        'ז' => &['ו', 'י'],
        'י' => &['ו', 'ז'],
        'ע' => &['צ'],
        'צ' => &['ע'],
        'ק' => &['כ'],
        'ש' => &['ת'],
        'מ' => &['ם', 'ב', 'כ'],
        'נ' => &['ן', 'ב'],
        'פ' => &['ף', 'כ'],
        _ => &[],
    }
}

/// Draw a random base letter, skipping everything in `exclude`.
///
/// Exclusions are normalized, so excluding a final form also excludes
/// its base letter. Returns `None` when the whole alphabet is excluded.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R, exclude: &[char]) -> Option<char> {
    let pool: Vec<char> = ALPHABET
        .iter()
        .copied()
        .filter(|c| !exclude.iter().any(|e| normalize_final(*e) == *c))
        .collect();
    pool.choose(rng).copied()
}

/// Letters of the word, with surrounding whitespace trimmed.
pub fn split_word(word: &str) -> Vec<char> {
    word.trim().chars().collect()
}

/// Whether the word contains the letter, ignoring final-form differences.
pub fn contains_letter(word: &str, letter: char) -> bool {
    let target = normalize_final(letter);
    word.chars().any(|c| normalize_final(c) == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn detects_hebrew_text() {
        assert!(is_hebrew("שלום"));
        assert!(is_hebrew("בוקר טוב"));
        assert!(is_hebrew(""));
        assert!(!is_hebrew("shalom"));
        assert!(!is_hebrew("שלום!"));
    }

    #[test]
    fn final_forms_normalize_to_base_letters() {
        assert_eq!(normalize_final('ך'), 'כ');
        assert_eq!(normalize_final('ם'), 'מ');
        assert_eq!(normalize_final('ן'), 'נ');
        assert_eq!(normalize_final('ף'), 'פ');
        assert_eq!(normalize_final('ץ'), 'צ');
        assert_eq!(normalize_final('א'), 'א');
    }

    #[test]
    fn normalization_is_idempotent() {
        for letter in ['ך', 'ם', 'ן', 'ף', 'ץ', 'ש', 'א'] {
            let once = normalize_final(letter);
            assert_eq!(normalize_final(once), once);
        }
    }

    #[test]
    fn normalize_finals_rewrites_word_endings() {
        assert_eq!(normalize_finals("שלום"), "שלומ");
        assert_eq!(normalize_finals("תפוח"), "תפוח");
    }

    #[test]
    fn final_form_shares_similarity_row() {
        assert_eq!(similar_letters('ם'), similar_letters('מ'));
        assert!(!similar_letters('ד').is_empty());
        assert!(similar_letters('א').is_empty());
    }

    #[test]
    fn similar_letters_exclude_the_letter_itself() {
        for letter in ALPHABET {
            assert!(
                !similar_letters(letter).contains(&letter),
                "similarity row of {} contains itself",
                letter
            );
        }
    }

    #[test]
    fn base_letter_rows_list_their_final_forms() {
        assert!(similar_letters('מ').contains(&'ם'));
        assert!(similar_letters('נ').contains(&'ן'));
        assert!(similar_letters('פ').contains(&'ף'));
    }

    #[test]
    fn random_letter_respects_exclusions() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let drawn = random_letter(&mut rng, &['א', 'ב']).unwrap();
            assert_ne!(drawn, 'א');
            assert_ne!(drawn, 'ב');
        }
    }

    #[test]
    fn excluding_a_final_form_excludes_its_base() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_ne!(random_letter(&mut rng, &['ם']).unwrap(), 'מ');
        }
    }

    #[test]
    fn exhausted_alphabet_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_letter(&mut rng, &ALPHABET), None);
    }

    #[test]
    fn split_word_trims_whitespace() {
        assert_eq!(split_word(" שלום "), vec!['ש', 'ל', 'ו', 'ם']);
    }

    #[test]
    fn contains_letter_ignores_final_forms() {
        assert!(contains_letter("שלום", 'מ'));
        assert!(contains_letter("שלום", 'ם'));
        assert!(!contains_letter("שלום", 'ב'));
    }
}
