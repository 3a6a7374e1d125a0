//! Acceptance filters for candidate headwords and glosses.

/// Punctuation and quotes stripped from both ends of accepted fields.
pub const BRACKETING: &[char] = &[' ', '.', ';', ':', ',', '\'', '‘', '’', '“', '”', '»', '«'];

// A headword opening with one of these is a fragment of surrounding punctuation
const BAD_HEADWORD_START: &[char] = &[
    '\'', '»', '«', '“', '”', '‘', '’', '.', ',', ';', ':', '!', '?', '[', ']', '(', ')', '{', '}',
];

const MAX_HEADWORD_CHARS: usize = 60;
const MIN_GLOSS_CHARS: usize = 2;
const MAX_GLOSS_CHARS: usize = 120;

/// Strip bracketing punctuation and quotes from both ends.
pub fn trim_bracketing(s: &str) -> &str {
    s.trim_matches(BRACKETING)
}

/// Accept a Guaraní headword, returning it trimmed of surrounding whitespace.
pub fn clean_headword(g: &str) -> Option<&str> {
    let g = g.trim();
    let first = g.chars().next()?;
    if BAD_HEADWORD_START.contains(&first) {
        return None;
    }
    if !g.chars().any(char::is_alphabetic) {
        return None;
    }
    if g.chars().count() > MAX_HEADWORD_CHARS {
        return None;
    }
    if first.is_ascii_digit() || first == '[' {
        return None;
    }
    Some(g)
}

/// Accept a Spanish gloss, returning it trimmed of bracketing punctuation.
pub fn clean_gloss(e: &str) -> Option<&str> {
    let e = trim_bracketing(e);
    let len = e.chars().count();
    if len < MIN_GLOSS_CHARS || len > MAX_GLOSS_CHARS {
        return None;
    }
    if !e.chars().any(is_latin_letter) {
        return None;
    }
    Some(e)
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || "ÁÉÍÓÚáéíóúÑñ".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headword_rejects_punctuation_start() {
        assert_eq!(clean_headword("’ava"), None);
        assert_eq!(clean_headword(", che"), None);
        assert_eq!(clean_headword("(tupã)"), None);
        assert_eq!(clean_headword("  "), None);
    }

    #[test]
    fn test_headword_rejects_digits_and_length() {
        assert_eq!(clean_headword("12 ava"), None);
        assert_eq!(clean_headword("--"), None);
        assert_eq!(clean_headword(&"a".repeat(61)), None);
        assert_eq!(clean_headword(&"a".repeat(60)), Some("a".repeat(60).as_str()));
    }

    #[test]
    fn test_headword_accepts_nasal_letters() {
        assert_eq!(clean_headword(" tupã "), Some("tupã"));
        assert_eq!(clean_headword("ỹ"), Some("ỹ"));
    }

    #[test]
    fn test_gloss_trims_quotes() {
        assert_eq!(clean_gloss("'dios del cielo';"), Some("dios del cielo"));
        assert_eq!(clean_gloss("«a»"), None);
        assert_eq!(clean_gloss("12 34"), None);
        assert_eq!(clean_gloss(&"b".repeat(121)), None);
    }

    #[test]
    fn test_cleaners_are_idempotent() {
        let g = clean_headword("mba'e.").unwrap();
        let g = trim_bracketing(g);
        assert_eq!(clean_headword(g), Some("mba'e"));
        let e = clean_gloss("“cosa”").unwrap();
        assert_eq!(clean_gloss(e), Some("cosa"));
    }
}
