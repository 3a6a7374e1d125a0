//! Mining pipeline: detectors → assembler → deduplicator → tiers.

use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::{Pair, add_pair};
use crate::config::MineConfig;
use crate::dedup::Deduplicator;
use crate::error::{MineError, Result};
use crate::normalize::TextBlob;
use crate::rules::DETECTORS;
use crate::summary::{Summary, high_confidence, summarize};

/// The three output tiers and their counts.
#[derive(Debug, Clone, Serialize)]
pub struct MineOutput {
    /// Every accepted pair in detection order. Empty when `keep_raw` is off.
    pub raw: Vec<Pair>,
    pub dedup: Vec<Pair>,
    pub high: Vec<Pair>,
    pub summary: Summary,
}

/// Run every detector over the blob and assemble the accepted pairs, in scan order.
pub fn mine_pairs(blob: &TextBlob, ctx_chars: usize) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for_each_pair(blob, ctx_chars, |pair| pairs.push(pair));
    pairs
}

fn for_each_pair(blob: &TextBlob, ctx_chars: usize, mut sink: impl FnMut(Pair)) {
    let offsets = blob.offsets();
    for (name, detector) in DETECTORS.iter() {
        let mut matched = 0usize;
        let mut accepted = 0usize;
        detector(blob.text(), ctx_chars, &mut |candidate| {
            matched += 1;
            if let Some(pair) = add_pair(&candidate, offsets) {
                accepted += 1;
                sink(pair);
            }
        });
        debug!(rule = *name, matched, accepted, "Detector finished");
    }
}

/// Mine a blob into raw, deduplicated and high-confidence tiers.
pub fn run(blob: &TextBlob, config: &MineConfig) -> Result<MineOutput> {
    config.validate()?;
    if blob.is_empty_text() {
        return Err(MineError::EmptyText);
    }

    let mut raw = Vec::new();
    let mut dedup = Deduplicator::new();
    for_each_pair(blob, config.ctx_chars, |pair| {
        if config.keep_raw {
            raw.push(pair.clone());
        }
        dedup.offer(pair);
    });
    let raw_count = dedup.offered();
    info!(raw = raw_count, "Total raw pairs mined");

    let dedup = dedup.finish();
    let high = high_confidence(&dedup, config.min_conf);
    let summary = summarize(raw_count, &dedup, &high, config.min_conf);
    info!(
        raw = summary.raw,
        dedup = summary.dedup,
        high_conf = summary.high_conf,
        min_conf = summary.min_conf,
        "Tiers built"
    );

    Ok(MineOutput {
        raw,
        dedup,
        high,
        summary,
    })
}

/// Convenience entry point for converter output with form-feed page breaks.
pub fn run_text(text: &str, config: &MineConfig) -> Result<MineOutput> {
    let pages = crate::normalize::split_pages(text, config.page_chunk_chars);
    run(&TextBlob::from_pages(&pages), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Che ñandu, 'yo soy ñandu' es como dicen.\n\
        ut: tupã, 'dios del cielo'; ava = el hombre;\u{c}\
        aguyje corresponde al agradecimiento sincero.\n\
        Tupã significa: 'dios del cielo'.";

    #[test]
    fn test_run_builds_consistent_tiers() {
        let output = run_text(SAMPLE, &MineConfig::default()).unwrap();
        assert_eq!(output.summary.raw, output.raw.len());
        assert_eq!(output.summary.dedup, output.dedup.len());
        assert_eq!(output.summary.high_conf, output.high.len());
        assert!(output.dedup.len() <= output.raw.len());
        assert!(output.high.iter().all(|p| output.dedup.contains(p)));
    }

    #[test]
    fn test_streaming_without_raw_reports_same_counts() {
        let with_raw = run_text(SAMPLE, &MineConfig::default()).unwrap();
        let config = MineConfig {
            keep_raw: false,
            ..MineConfig::default()
        };
        let without_raw = run_text(SAMPLE, &config).unwrap();
        assert!(without_raw.raw.is_empty());
        assert_eq!(without_raw.summary, with_raw.summary);
        assert_eq!(without_raw.dedup, with_raw.dedup);
    }

    #[test]
    fn test_empty_text_is_fatal() {
        assert!(matches!(
            run_text(" \n\u{c}  ", &MineConfig::default()),
            Err(MineError::EmptyText)
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MineConfig {
            ctx_chars: 0,
            ..MineConfig::default()
        };
        assert!(matches!(run_text(SAMPLE, &config), Err(MineError::InvalidConfig(_))));
    }
}
