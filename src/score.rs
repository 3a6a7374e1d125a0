use crate::language::{looks_source_like, looks_target_like};
use crate::rules::RuleName;

pub const MIN_CONFIDENCE: u8 = 1;
pub const MAX_CONFIDENCE: u8 = 5;

/// Rules whose match shape already pairs a term with its definition.
// Every rule currently qualifies, so this acts as a uniform floor.
pub fn is_structurally_explicit(rule: RuleName) -> bool {
    matches!(
        rule,
        RuleName::Quotes
            | RuleName::UtQuotes
            | RuleName::UtEqual
            | RuleName::DiceSignifica
            | RuleName::CorrespondeEquivale
            | RuleName::ColonList
    )
}

/// Additive reliability score in `1..=5`.
pub fn confidence_score(headword: &str, gloss: &str, rule: RuleName) -> u8 {
    let mut conf = MIN_CONFIDENCE;
    if looks_source_like(headword) {
        conf += 1;
    }
    if looks_target_like(gloss) {
        conf += 1;
    }
    // multi-word glosses read as definitions
    if gloss.contains(' ') {
        conf += 1;
    }
    if is_structurally_explicit(rule) {
        conf += 1;
    }
    conf
}
