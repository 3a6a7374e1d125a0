//! Collapse pairs sharing a case-folded (headword, gloss) key.
//!
//! The survivor for a key is the highest-confidence pair, then the one on the
//! earliest page, then the first one offered. Survivors come out ordered by
//! confidence (descending), page, and first-seen order, which is exactly what a
//! stable sort followed by a keep-first scan produces, without holding every
//! candidate in memory.

use std::collections::HashMap;

use crate::assemble::Pair;

struct Entry {
    seq: usize,
    pair: Pair,
}

#[derive(Default)]
pub struct Deduplicator {
    best: HashMap<(String, String), Entry>,
    offered: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pairs offered so far, duplicates included.
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn offer(&mut self, pair: Pair) {
        let seq = self.offered;
        self.offered += 1;

        let key = pair.dedup_key();
        match self.best.get_mut(&key) {
            Some(entry) => {
                let better = pair.confidence > entry.pair.confidence
                    || (pair.confidence == entry.pair.confidence && pair.page < entry.pair.page);
                if better {
                    *entry = Entry { seq, pair };
                }
            }
            None => {
                self.best.insert(key, Entry { seq, pair });
            }
        }
    }

    pub fn finish(self) -> Vec<Pair> {
        let mut entries: Vec<Entry> = self.best.into_values().collect();
        entries.sort_by(|a, b| {
            b.pair
                .confidence
                .cmp(&a.pair.confidence)
                .then(a.pair.page.cmp(&b.pair.page))
                .then(a.seq.cmp(&b.seq))
        });
        entries.into_iter().map(|e| e.pair).collect()
    }
}

/// Deduplicate an already collected list of pairs.
pub fn dedup_pairs(pairs: &[Pair]) -> Vec<Pair> {
    let mut dedup = Deduplicator::new();
    for pair in pairs {
        dedup.offer(pair.clone());
    }
    dedup.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleName;
    use std::collections::HashSet;

    fn pair(headword: &str, gloss: &str, page: usize, confidence: u8, rule: RuleName) -> Pair {
        Pair {
            page,
            headword: headword.to_string(),
            gloss: gloss.to_string(),
            left_context: String::new(),
            right_context: String::new(),
            rule,
            confidence,
        }
    }

    // Stable sort, keep first per key
    fn sort_then_keep_first(pairs: &[Pair]) -> Vec<Pair> {
        let mut sorted = pairs.to_vec();
        sorted.sort_by(|a, b| b.confidence.cmp(&a.confidence).then(a.page.cmp(&b.page)));
        let mut seen = HashSet::new();
        sorted.into_iter().filter(|p| seen.insert(p.dedup_key())).collect()
    }

    fn sample() -> Vec<Pair> {
        vec![
            pair("ava", "el hombre", 3, 4, RuleName::Quotes),
            pair("Ava", "El hombre", 2, 4, RuleName::ColonList),
            pair("tupã", "dios", 1, 3, RuleName::Quotes),
            pair("tupã", "dios", 1, 3, RuleName::UtQuotes),
            pair("ava", "el hombre", 9, 5, RuleName::DiceSignifica),
            pair("ko", "este", 2, 4, RuleName::UtEqual),
            pair("che", "yo", 2, 4, RuleName::Quotes),
        ]
    }

    #[test]
    fn test_keeps_highest_confidence_then_earliest_page() {
        let out = dedup_pairs(&sample());
        let ava: Vec<_> = out.iter().filter(|p| p.dedup_key().0 == "ava").collect();
        assert_eq!(ava.len(), 1);
        assert_eq!(ava[0].confidence, 5);
        assert_eq!(ava[0].page, 9);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let out = dedup_pairs(&sample());
        let tupa: Vec<_> = out.iter().filter(|p| p.headword == "tupã").collect();
        assert_eq!(tupa.len(), 1);
        assert_eq!(tupa[0].rule, RuleName::Quotes);
    }

    #[test]
    fn test_matches_sort_then_keep_first() {
        let pairs = sample();
        assert_eq!(dedup_pairs(&pairs), sort_then_keep_first(&pairs));
    }

    #[test]
    fn test_output_order() {
        let out = dedup_pairs(&sample());
        let order: Vec<_> = out.iter().map(|p| p.headword.as_str()).collect();
        assert_eq!(order, vec!["ava", "ko", "che", "tupã"]);
    }
}
