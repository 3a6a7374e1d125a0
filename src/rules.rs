//! Structural detectors for the glossing conventions found in colonial grammars.
//!
//! Every detector scans the whole blob on its own. Matches whose headword does not
//! read as Guaraní, or whose gloss does not read as Spanish, are dropped here before
//! they ever reach the assembler.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::language::{looks_source_like, looks_target_like};

/// Default number of context characters kept either side of a match.
pub const DEFAULT_CTX_CHARS: usize = 140;

/// Longest stretch after an `ut:` marker that is searched for clauses.
const UT_WINDOW_CHARS: usize = 600;

lazy_static! {
    // text 'gloss' text, on one line around the quotes
    static ref QUOTED: Regex =
        Regex::new(r"([^\n\r]{0,160})[‘'“»]([^’'”«]+)[’'”«]([^\n\r]{0,160})").unwrap();
    static ref TOKEN_SPLIT: Regex = Regex::new(r"[\s,;:\(\)\[\]\{\}—–\-]+").unwrap();

    static ref UT_MARKER: Regex = Regex::new(&format!(r"(?is)ut:\s*(.{{1,{}}})", UT_WINDOW_CHARS)).unwrap();
    // word, 'translation'
    static ref UT_QUOTED: Regex = Regex::new(
        r"([A-Za-zÁÉÍÓÚáéíóúÑñãẽĩõũỹ’'.\- ]{1,60}),\s*[‘'“]([^’'”]+)[’'”]"
    ).unwrap();
    // word = translation
    static ref UT_EQUAL: Regex = Regex::new(
        r"([A-Za-zÑñãẽĩõũỹ’'.\- ]{1,60})\s*=\s*([A-Za-zÁÉÍÓÚáéíóúÑñ ,;:.']{1,120})"
    ).unwrap();

    static ref DICE: Regex = Regex::new(
        r"(?i)([A-Za-zÑñãẽĩõũỹ’'.\- ]{1,60})\s*,?\s*(?:dice|dícese|significa)\s*[: ]\s*[‘'“]([^’'”]+)[’'”]"
    ).unwrap();
    static ref CORRESPONDE: Regex = Regex::new(
        r"(?i)([A-Za-zÑñãẽĩõũỹ’'.\- ]{1,60})\s*,?\s*(?:corresponde al|equivale a)\s*[: ]\s*([A-Za-zÁÉÍÓÚáéíóúÑñ ,;:.']{1,120})"
    ).unwrap();
    // start of text, sentence end, newline or colon, then: word, 'gloss'
    static ref COLON_LIST: Regex = Regex::new(
        r"(?:^|[.\n:])\s*([A-Za-zÑñãẽĩõũỹ’'.\- ]{1,60}),\s*[‘'“]([^’'”]+)[’'”]"
    ).unwrap();
}

/// Name of the detector that produced a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleName {
    Quotes,
    UtQuotes,
    UtEqual,
    DiceSignifica,
    CorrespondeEquivale,
    ColonList,
}

impl RuleName {
    pub const ALL: [RuleName; 6] = [
        RuleName::Quotes,
        RuleName::UtQuotes,
        RuleName::UtEqual,
        RuleName::DiceSignifica,
        RuleName::CorrespondeEquivale,
        RuleName::ColonList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::Quotes => "quotes",
            RuleName::UtQuotes => "ut_quotes",
            RuleName::UtEqual => "ut_equal",
            RuleName::DiceSignifica => "dice_significa",
            RuleName::CorrespondeEquivale => "corresponde_equivale",
            RuleName::ColonList => "colon_list",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw match that passed the language pre-filter. Borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Byte offset used for page attribution.
    pub position: usize,
    pub headword: &'a str,
    pub gloss: &'a str,
    pub rule: RuleName,
    pub left_context: &'a str,
    pub right_context: &'a str,
}

impl Candidate<'_> {
    fn passes_prefilter(&self) -> bool {
        looks_source_like(self.headword) && looks_target_like(self.gloss)
    }
}

/// Detector signature: scan `text`, handing pre-filtered candidates to `emit`.
pub type Detector = for<'a> fn(&'a str, usize, &mut dyn FnMut(Candidate<'a>));

/// Detectors in scan order. The order decides tie-breaks during deduplication.
pub const DETECTORS: [(&str, Detector); 5] = [
    ("quotes", detect_quotes),
    ("ut", detect_ut_clauses),
    ("dice_significa", detect_dice_significa),
    ("corresponde_equivale", detect_corresponde_equivale),
    ("colon_list", detect_colon_list),
];

fn emit_if_plausible<'a>(candidate: Candidate<'a>, emit: &mut dyn FnMut(Candidate<'a>)) {
    if candidate.passes_prefilter() {
        emit(candidate);
    }
}

/// Up to `n` characters ending at byte offset `end`.
pub fn left_window(text: &str, end: usize, n: usize) -> &str {
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(end);
    &head[start..]
}

/// Up to `n` characters starting at byte offset `start`.
pub fn right_window(text: &str, start: usize, n: usize) -> &str {
    let tail = &text[start..];
    let end = tail.char_indices().nth(n).map(|(i, _)| i).unwrap_or(tail.len());
    &tail[..end]
}

/// Characters `from..to` of `s`, clamped to its length.
fn char_slice(s: &str, from: usize, to: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    let start = byte_at(from);
    let end = byte_at(to).max(start);
    &s[start..end]
}

/// Last non-empty token of `s`, splitting on whitespace and list punctuation.
fn last_token(s: &str) -> &str {
    TOKEN_SPLIT
        .split(s.trim())
        .filter(|t| !t.is_empty())
        .last()
        .unwrap_or("")
}

/// Quoted glosses: the token right before the opening quote is the headword.
pub fn detect_quotes<'a>(text: &'a str, _ctx_chars: usize, emit: &mut dyn FnMut(Candidate<'a>)) {
    for caps in QUOTED.captures_iter(text) {
        let (Some(whole), Some(left), Some(gloss), Some(right)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        emit_if_plausible(
            Candidate {
                position: whole.start(),
                headword: last_token(left.as_str()),
                gloss: gloss.as_str(),
                rule: RuleName::Quotes,
                left_context: left.as_str(),
                right_context: right.as_str(),
            },
            emit,
        );
    }
}

/// `ut:` example lists. The window after the marker stops at the next page marker and
/// splits into `;` clauses, each read as `word, 'gloss'` or `word = gloss`.
pub fn detect_ut_clauses<'a>(text: &'a str, ctx_chars: usize, emit: &mut dyn FnMut(Candidate<'a>)) {
    for caps in UT_MARKER.captures_iter(text) {
        let (Some(whole), Some(window)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let segment = window.as_str().split("[[[PAGE").next().unwrap_or("");
        let left_context = char_slice(segment, 0, ctx_chars);
        let right_context = char_slice(segment, ctx_chars, ctx_chars * 2);

        for clause in segment.split(';') {
            for m in UT_QUOTED.captures_iter(clause) {
                let (Some(head), Some(gloss)) = (m.get(1), m.get(2)) else {
                    continue;
                };
                emit_if_plausible(
                    Candidate {
                        position: whole.start(),
                        headword: head.as_str().trim_matches(&[' ', '.'][..]),
                        gloss: gloss.as_str(),
                        rule: RuleName::UtQuotes,
                        left_context,
                        right_context,
                    },
                    emit,
                );
            }
            for m in UT_EQUAL.captures_iter(clause) {
                let (Some(head), Some(gloss)) = (m.get(1), m.get(2)) else {
                    continue;
                };
                emit_if_plausible(
                    Candidate {
                        position: whole.start(),
                        headword: head.as_str(),
                        gloss: gloss.as_str(),
                        rule: RuleName::UtEqual,
                        left_context,
                        right_context,
                    },
                    emit,
                );
            }
        }
    }
}

// Shared shape of the phrase-trigger-gloss rules: group 1 headword, group 2 gloss,
// generic context window around the whole match.
fn detect_with_window<'a>(
    pattern: &Regex,
    rule: RuleName,
    text: &'a str,
    ctx_chars: usize,
    emit: &mut dyn FnMut(Candidate<'a>),
) {
    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(head), Some(gloss)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        emit_if_plausible(
            Candidate {
                position: whole.start(),
                headword: head.as_str(),
                gloss: gloss.as_str(),
                rule,
                left_context: left_window(text, whole.start(), ctx_chars),
                right_context: right_window(text, whole.end(), ctx_chars),
            },
            emit,
        );
    }
}

/// `X dice 'gloss'`, `X dícese: 'gloss'`, `X significa 'gloss'`.
pub fn detect_dice_significa<'a>(text: &'a str, ctx_chars: usize, emit: &mut dyn FnMut(Candidate<'a>)) {
    detect_with_window(&DICE, RuleName::DiceSignifica, text, ctx_chars, emit);
}

/// `X corresponde al gloss`, `X equivale a gloss`, gloss unquoted.
pub fn detect_corresponde_equivale<'a>(
    text: &'a str,
    ctx_chars: usize,
    emit: &mut dyn FnMut(Candidate<'a>),
) {
    detect_with_window(&CORRESPONDE, RuleName::CorrespondeEquivale, text, ctx_chars, emit);
}

/// Line or sentence openers of the form `word, 'gloss'`.
pub fn detect_colon_list<'a>(text: &'a str, ctx_chars: usize, emit: &mut dyn FnMut(Candidate<'a>)) {
    detect_with_window(&COLON_LIST, RuleName::ColonList, text, ctx_chars, emit);
}
