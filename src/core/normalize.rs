//! Accent- and case-insensitive text normalization
//!
//! Two words that only differ by case or diacritics share the same canonical
//! form and the same collation key:
//!
//! ```
//! use wordle_rules::core::{collation_key, normalize};
//!
//! assert_eq!(normalize("Élan"), "elan");
//! assert_eq!(collation_key("Élan"), collation_key("ELAN"));
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Opaque, totally ordered dictionary lookup key
///
/// Built from the canonical form of a word, so it compares the way a
/// primary-strength collator would (base letters only). Never displayed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedKey(Vec<u8>);

/// Reduce `text` to its canonical comparison form
///
/// Pipeline: NFD, drop combining marks, lowercase, then NFD/drop again (some
/// lowercase mappings emit a mark) and recompose to NFC. The `œ` and `æ`
/// ligatures are expanded to `oe` and `ae`.
///
/// Total function: code points without a decomposition pass through.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    let mut folded = String::with_capacity(lowered.len());
    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'œ' => folded.push_str("oe"),
            'æ' => folded.push_str("ae"),
            _ => folded.push(c),
        }
    }

    folded.nfc().collect()
}

/// Compute the dictionary lookup key of `text`
#[must_use]
pub fn collation_key(text: &str) -> NormalizedKey {
    NormalizedKey(normalize(text).into_bytes())
}

/// Check whether a canonical form can be typed on a 26-letter board
///
/// Only forms made exclusively of `a`..=`z` can be drawn as a secret word or
/// accepted as a guess.
#[inline]
#[must_use]
pub fn is_playable_form(canonical: &str) -> bool {
    !canonical.is_empty() && canonical.bytes().all(|b| b.is_ascii_lowercase())
}

/// Normalize a single typed character to a board letter
///
/// Returns `None` unless the character reduces to exactly one `a`..=`z` letter.
#[must_use]
pub fn normalize_letter(ch: char) -> Option<u8> {
    let mut buf = [0u8; 4];
    let canonical = normalize(ch.encode_utf8(&mut buf));
    match canonical.as_bytes() {
        &[b] if b.is_ascii_lowercase() => Some(b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize("Élan"), "elan");
        assert_eq!(normalize("elan"), "elan");
        assert_eq!(normalize("ÇÀ ET LÀ"), "ca et la");
        assert_eq!(normalize("naïveté"), "naivete");
    }

    #[test]
    fn normalize_handles_precomposed_and_decomposed_input() {
        let precomposed = "\u{e9}t\u{e9}";
        let decomposed = "e\u{301}te\u{301}";
        assert_eq!(normalize(precomposed), "ete");
        assert_eq!(normalize(decomposed), "ete");
    }

    #[test]
    fn normalize_expands_ligatures() {
        assert_eq!(normalize("Cœur"), "coeur");
        assert_eq!(normalize("ŒUVRE"), "oeuvre");
        assert_eq!(normalize("ex æquo"), "ex aequo");
    }

    #[test]
    fn normalize_is_idempotent() {
        for word in ["Élan", "crâne", "İstanbul", "Ångström", "straße", "", "a-b'c", "ŒIL"] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once, "not idempotent for {word:?}");
        }
    }

    #[test]
    fn normalize_passes_unknown_code_points_through() {
        assert_eq!(normalize("a-b'c"), "a-b'c");
        assert_eq!(normalize("123"), "123");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn collation_keys_ignore_case_and_accents() {
        assert_eq!(collation_key("Élan"), collation_key("elan"));
        assert_eq!(collation_key("FORÊT"), collation_key("foret"));
        assert_ne!(collation_key("foret"), collation_key("forets"));
    }

    #[test]
    fn collation_keys_are_ordered() {
        assert!(collation_key("abeille") < collation_key("Zèbre"));
        assert!(collation_key("École") < collation_key("fable"));
    }

    #[test]
    fn playable_form_requires_plain_letters() {
        assert!(is_playable_form("table"));
        assert!(!is_playable_form(""));
        assert!(!is_playable_form("porte-clé"));
        assert!(!is_playable_form("aujourd'hui"));
        assert!(!is_playable_form("straße"));
    }

    #[test]
    fn normalize_letter_maps_to_ascii() {
        assert_eq!(normalize_letter('a'), Some(b'a'));
        assert_eq!(normalize_letter('É'), Some(b'e'));
        assert_eq!(normalize_letter('ç'), Some(b'c'));
        assert_eq!(normalize_letter('.'), None);
        assert_eq!(normalize_letter('7'), None);
        assert_eq!(normalize_letter('œ'), None);
    }
}
