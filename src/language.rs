//! Surface heuristics deciding whether a short string reads as Guaraní (the
//! headword language) or Spanish (the gloss language).
//!
//! The two predicates are independent. A string can satisfy both or neither, and
//! callers combine them per rule.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    // Spanish function words, matched against the space-padded lowercase string
    static ref SPANISH_WORD_CUES: Vec<&'static str> = vec![
        " el ", " la ", " los ", " las ", " de ", " del ", " al ",
        " por ", " en ", " mi ", " tu ", " su ", " que ", " como ",
        " este ", " esa ", " eso ", " aquel ", " aquella ", " aquello ",
    ];

    // Pronouns and particles that open Guaraní phrases
    static ref GUARANI_OPENERS: Vec<&'static str> = vec![
        "che", "nde", "tupã", "ava", "mba'e", "ha'e", "ñande",
        "ore", "peẽ", "ko", "upe", "ahe", "aj", "mba'",
    ];

    // Nasal vowels, ñ, ý and glottal-stop apostrophes
    static ref GUARANI_MARKS: HashSet<char> =
        ['ã', 'ẽ', 'ĩ', 'õ', 'ũ', 'ỹ', 'ñ', 'ý', '\'', '’'].into_iter().collect();

    static ref SPANISH_ACCENTS: HashSet<char> =
        ['á', 'é', 'í', 'ó', 'ú', 'ñ'].into_iter().collect();

    // Their presence vetoes the "multi-word means Spanish" fallback
    static ref NASAL_MARKS: HashSet<char> =
        ['ã', 'ẽ', 'ĩ', 'õ', 'ũ', 'ỹ', '’'].into_iter().collect();
}

/// Short phrases with Guaraní orthography: nasal or glottal marks, a known opener,
/// or a `y`/apostrophe inside at most four tokens.
pub fn looks_source_like(s: &str) -> bool {
    let lower = s.to_lowercase();
    if lower.chars().any(|c| GUARANI_MARKS.contains(&c)) {
        return true;
    }
    if GUARANI_OPENERS.iter().any(|w| lower.starts_with(w)) {
        return true;
    }
    // y as vowel
    let has_y_or_apostrophe = lower.contains(&['y', '\'', '’'][..]);
    has_y_or_apostrophe && lower.split_whitespace().count() <= 4
}

/// Phrases reading as Spanish: a function word, an accented vowel, or several words
/// without any Guaraní nasal mark.
pub fn looks_target_like(s: &str) -> bool {
    let padded = format!(" {} ", s.to_lowercase());
    if SPANISH_WORD_CUES.iter().any(|cue| padded.contains(cue)) {
        return true;
    }
    if padded.chars().any(|c| SPANISH_ACCENTS.contains(&c)) {
        return true;
    }
    s.contains(' ') && !padded.chars().any(|c| NASAL_MARKS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_like_marks() {
        assert!(looks_source_like("tupã"));
        assert!(looks_source_like("ñandu"));
        assert!(looks_source_like("mba'e"));
        assert!(looks_source_like("Che ru"));
    }

    #[test]
    fn test_source_like_y_needs_short_phrase() {
        assert!(looks_source_like("aguyje"));
        assert!(!looks_source_like("y todos los hombres de aquella tierra"));
        assert!(!looks_source_like("casa"));
    }

    #[test]
    fn test_target_like_cues() {
        assert!(looks_target_like("dios del cielo"));
        assert!(looks_target_like("corazón"));
        assert!(looks_target_like("agradecimiento sincero"));
        assert!(!looks_target_like("aguyje"));
    }

    #[test]
    fn test_nasal_vetoes_multiword_fallback() {
        assert!(!looks_target_like("ko tupã"));
        assert!(looks_target_like("ko tupa"));
    }

    #[test]
    fn test_predicates_overlap() {
        // ñ and an article satisfy both
        let s = "el ñandu";
        assert!(looks_source_like(s));
        assert!(looks_target_like(s));
    }
}
