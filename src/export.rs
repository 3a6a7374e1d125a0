//! Writers for the mined tiers. Output directories are created on demand.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::assemble::Pair;
use crate::error::Result;
use crate::pipeline::MineOutput;

pub const RAW_CSV: &str = "pairs_all_raw.csv";
pub const DEDUP_CSV: &str = "pairs_dedup.csv";
pub const STATS_JSON: &str = "stats.json";
pub const TIERS_JSON: &str = "pairs.json";

pub fn high_conf_csv(min_conf: u8) -> String {
    format!("pairs_high_conf_ge{}.csv", min_conf)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    page: usize,
    #[serde(rename = "guarani")]
    headword: &'a str,
    #[serde(rename = "espanhol")]
    gloss: &'a str,
    left_context: &'a str,
    right_context: &'a str,
    rule: &'static str,
    confidence: u8,
}

impl<'a> From<&'a Pair> for CsvRow<'a> {
    fn from(pair: &'a Pair) -> Self {
        Self {
            page: pair.page,
            headword: &pair.headword,
            gloss: &pair.gloss,
            left_context: &pair.left_context,
            right_context: &pair.right_context,
            rule: pair.rule.as_str(),
            confidence: pair.confidence,
        }
    }
}

/// Write one tier as CSV. Returns `false` and writes nothing when there are no rows.
pub fn write_csv(rows: &[Pair], path: &Path) -> Result<bool> {
    if rows.is_empty() {
        warn!(path = %path.display(), "No rows to save");
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for pair in rows {
        writer.serialize(CsvRow::from(pair))?;
    }
    writer.flush()?;
    info!(rows = rows.len(), path = %path.display(), "Saved rows");
    Ok(true)
}

/// Write all three tiers plus `stats.json` into `out_dir`.
pub fn write_outputs(output: &MineOutput, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let tiers = [
        (&output.raw, out_dir.join(RAW_CSV)),
        (&output.dedup, out_dir.join(DEDUP_CSV)),
        (&output.high, out_dir.join(high_conf_csv(output.summary.min_conf))),
    ];
    for (rows, path) in tiers {
        if write_csv(rows, &path)? {
            written.push(path);
        }
    }

    let stats_path = out_dir.join(STATS_JSON);
    fs::write(&stats_path, serde_json::to_string_pretty(&output.summary)?)?;
    info!(path = %stats_path.display(), "Saved stats");
    written.push(stats_path);

    Ok(written)
}

/// Write every tier and the summary as a single JSON document.
pub fn write_json(output: &MineOutput, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(TIERS_JSON);
    fs::write(&path, serde_json::to_string_pretty(output)?)?;
    Ok(path)
}
