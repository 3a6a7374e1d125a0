//! Output tiers and their summary counts.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::assemble::Pair;

/// Pair counts per tier, serialized as `{"raw", "dedup", "high_conf(>=T)"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub raw: usize,
    pub dedup: usize,
    pub high_conf: usize,
    pub min_conf: u8,
}

impl Summary {
    pub fn high_conf_key(&self) -> String {
        format!("high_conf(>={})", self.min_conf)
    }
}

impl Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("raw", &self.raw)?;
        map.serialize_entry("dedup", &self.dedup)?;
        map.serialize_entry(&self.high_conf_key(), &self.high_conf)?;
        map.end()
    }
}

/// High-confidence subset of the deduplicated tier, in the same order.
pub fn high_confidence(dedup: &[Pair], min_conf: u8) -> Vec<Pair> {
    dedup
        .iter()
        .filter(|p| p.confidence >= min_conf)
        .cloned()
        .collect()
}

pub fn summarize(raw_count: usize, dedup: &[Pair], high: &[Pair], min_conf: u8) -> Summary {
    Summary {
        raw: raw_count,
        dedup: dedup.len(),
        high_conf: high.len(),
        min_conf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleName;

    fn pair(confidence: u8) -> Pair {
        Pair {
            page: 1,
            headword: format!("ava{}", confidence),
            gloss: "el hombre".to_string(),
            left_context: String::new(),
            right_context: String::new(),
            rule: RuleName::Quotes,
            confidence,
        }
    }

    #[test]
    fn test_high_confidence_threshold() {
        let dedup = vec![pair(5), pair(4), pair(3)];
        let high = high_confidence(&dedup, 4);
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|p| p.confidence >= 4));
    }

    #[test]
    fn test_summary_json_keys_in_order() {
        let summary = Summary { raw: 10, dedup: 6, high_conf: 2, min_conf: 4 };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"raw":10,"dedup":6,"high_conf(>=4)":2}"#);
    }
}
