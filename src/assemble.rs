//! The single gate every detector match passes through on its way to a [`Pair`].

use serde::{Deserialize, Serialize};

use crate::clean::{clean_gloss, clean_headword, trim_bracketing};
use crate::language::{looks_source_like, looks_target_like};
use crate::normalize::clean_spaces;
use crate::pages::PageOffsets;
use crate::rules::{Candidate, RuleName};
use crate::score::confidence_score;

/// Characters of context kept on each side of an accepted pair.
pub const MAX_CONTEXT_CHARS: usize = 160;

/// A validated headword/gloss pair. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub page: usize,
    pub headword: String,
    pub gloss: String,
    pub left_context: String,
    pub right_context: String,
    pub rule: RuleName,
    pub confidence: u8,
}

impl Pair {
    /// Case-folded (headword, gloss) identity used for deduplication.
    pub fn dedup_key(&self) -> (String, String) {
        (
            self.headword.trim().to_lowercase(),
            self.gloss.trim().to_lowercase(),
        )
    }
}

/// Validate and finish a candidate. Rejections are silent: detectors are broad on
/// purpose and most of what they find is noise.
pub fn add_pair(candidate: &Candidate<'_>, page_offsets: &PageOffsets) -> Option<Pair> {
    let headword = clean_spaces(candidate.headword);
    let gloss = clean_spaces(candidate.gloss);
    if headword.is_empty() || gloss.is_empty() {
        return None;
    }
    clean_headword(&headword)?;
    clean_gloss(&gloss)?;
    // keep Spanish out of the headword column
    if looks_target_like(&headword) && !looks_source_like(&headword) {
        return None;
    }

    Some(Pair {
        page: page_offsets.page_of(candidate.position),
        confidence: confidence_score(&headword, &gloss, candidate.rule),
        headword: trim_bracketing(&headword).to_string(),
        gloss: trim_bracketing(&gloss).to_string(),
        left_context: tail_chars(&clean_spaces(candidate.left_context), MAX_CONTEXT_CHARS).to_string(),
        right_context: head_chars(&clean_spaces(candidate.right_context), MAX_CONTEXT_CHARS).to_string(),
        rule: candidate.rule,
    })
}

fn tail_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    match s.char_indices().nth(count.saturating_sub(n)) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate<'a>(headword: &'a str, gloss: &'a str) -> Candidate<'a> {
        Candidate {
            position: 0,
            headword,
            gloss,
            rule: RuleName::Quotes,
            left_context: "",
            right_context: "",
        }
    }

    fn offsets() -> PageOffsets {
        PageOffsets::new(vec![0])
    }

    #[test]
    fn test_accepts_and_trims() {
        let pair = add_pair(&candidate("  tupã ", "'dios   del\ncielo';"), &offsets()).unwrap();
        assert_eq!(pair.headword, "tupã");
        assert_eq!(pair.gloss, "dios del cielo");
        assert_eq!(pair.page, 1);
        assert_eq!(pair.confidence, 5);
    }

    #[test]
    fn test_rejects_spanish_headword() {
        assert!(add_pair(&candidate("la casa", "el hogar"), &offsets()).is_none());
        // both predicates fire: kept
        assert!(add_pair(&candidate("el ñandu", "el avestruz"), &offsets()).is_some());
    }

    #[test]
    fn test_rejects_failed_cleaners() {
        assert!(add_pair(&candidate("(ava", "el hombre"), &offsets()).is_none());
        assert!(add_pair(&candidate("ava", "'x'"), &offsets()).is_none());
        assert!(add_pair(&candidate(" ", "el hombre"), &offsets()).is_none());
    }

    #[test]
    fn test_context_truncation() {
        let left = "a".repeat(200) + "LEFT";
        let right = "RIGHT".to_string() + &"b".repeat(200);
        let mut c = candidate("ava", "el hombre");
        c.left_context = &left;
        c.right_context = &right;
        let pair = add_pair(&c, &offsets()).unwrap();
        assert_eq!(pair.left_context.chars().count(), MAX_CONTEXT_CHARS);
        assert!(pair.left_context.ends_with("LEFT"));
        assert_eq!(pair.right_context.chars().count(), MAX_CONTEXT_CHARS);
        assert!(pair.right_context.starts_with("RIGHT"));
    }

    #[test]
    fn test_tail_and_head_chars_are_utf8_safe() {
        assert_eq!(tail_chars("ñandũ", 2), "dũ");
        assert_eq!(head_chars("ñandũ", 2), "ña");
        assert_eq!(tail_chars("ko", 10), "ko");
    }
}
