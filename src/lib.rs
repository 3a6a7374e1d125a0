//! Mine Guaraní headword / Spanish gloss pairs from the extracted text of colonial
//! grammars.
//!
//! Input is a page-marked [`TextBlob`]. Five structural detectors propose
//! candidates, [`add_pair`] validates and scores them, and [`pipeline::run`]
//! deduplicates the result into raw, deduplicated and high-confidence tiers.

pub mod assemble;
pub mod clean;
pub mod config;
pub mod dedup;
pub mod error;
pub mod export;
pub mod language;
pub mod logger;
pub mod normalize;
pub mod pages;
pub mod pipeline;
pub mod rules;
pub mod score;
pub mod summary;

#[cfg(feature = "python")]
mod python;

pub use assemble::{Pair, add_pair};
pub use clean::{clean_gloss, clean_headword};
pub use config::MineConfig;
pub use dedup::{Deduplicator, dedup_pairs};
pub use error::{MineError, Result};
pub use language::{looks_source_like, looks_target_like};
pub use normalize::{TextBlob, split_pages};
pub use pages::{PageOffsets, page_of};
pub use pipeline::{MineOutput, mine_pairs, run, run_text};
pub use rules::{Candidate, RuleName};
pub use score::confidence_score;
pub use summary::Summary;
