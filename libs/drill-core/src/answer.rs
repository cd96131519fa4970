//! Answer evaluation.
//!
//! Comparisons are strict booleans. Letters and words are equal when
//! they match after trimming and final-form normalization; anagram
//! assembly is raw equality, since its tiles come from the word itself.

use crate::hebrew::normalize_finals;

/// Whether two single-letter answers are the same letter.
///
/// `ם` answers a hidden `מ` and vice versa.
pub fn letters_equal(a: &str, b: &str) -> bool {
    words_equal(a, b)
}

/// Whether two words are the same after trimming and final-form
/// normalization. Internal whitespace is compared as-is.
pub fn words_equal(a: &str, b: &str) -> bool {
    normalize_finals(a.trim()) == normalize_finals(b.trim())
}

/// Whether the assembled tile selection spells the word exactly.
///
/// Raw, order-sensitive equality: normalizing here would let a
/// final-form tile stand in for its base letter.
pub fn anagram_equal(selected: &[char], word: &str) -> bool {
    String::from_iter(selected.iter()) == word.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_match_across_final_forms() {
        assert!(words_equal("שלום", "שלומ"));
        assert!(words_equal(" שלום ", "שלום"));
        assert!(!words_equal("שלום", "שלוב"));
    }

    #[test]
    fn internal_whitespace_is_significant() {
        assert!(!words_equal("בוקר טוב", "בוקרטוב"));
        assert!(words_equal("בוקר טוב", " בוקר טוב"));
    }

    #[test]
    fn letters_match_across_final_forms() {
        assert!(letters_equal("ם", "מ"));
        assert!(letters_equal("כ", "ך"));
        assert!(!letters_equal("ם", "נ"));
    }

    #[test]
    fn anagram_requires_exact_assembly() {
        assert!(anagram_equal(&['ת', 'פ', 'ו', 'ח'], "תפוח"));
        assert!(!anagram_equal(&['ח', 'ו', 'פ', 'ת'], "תפוח"));
        assert!(!anagram_equal(&['ת', 'פ', 'ו'], "תפוח"));
    }

    #[test]
    fn anagram_does_not_normalize_finals() {
        assert!(anagram_equal(&['ש', 'ל', 'ו', 'ם'], "שלום"));
        assert!(!anagram_equal(&['ש', 'ל', 'ו', 'מ'], "שלום"));
    }
}
