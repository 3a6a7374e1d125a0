//! Python bindings, built with `--features python`.

use std::collections::HashMap;
use std::path::Path;

use pyo3::prelude::*;

use crate::assemble::Pair;
use crate::config::MineConfig;
use crate::error::MineError;
use crate::export::write_outputs;
use crate::pipeline::{MineOutput, run_text};

/// Mined pair returned to Python
#[pyclass]
#[derive(Clone)]
pub struct PairInfo {
    #[pyo3(get)]
    page: usize,
    #[pyo3(get)]
    guarani: String,
    #[pyo3(get)]
    espanhol: String,
    #[pyo3(get)]
    left_context: String,
    #[pyo3(get)]
    right_context: String,
    #[pyo3(get)]
    rule: String,
    #[pyo3(get)]
    confidence: u8,
}

impl From<Pair> for PairInfo {
    fn from(pair: Pair) -> Self {
        Self {
            page: pair.page,
            rule: pair.rule.to_string(),
            guarani: pair.headword,
            espanhol: pair.gloss,
            left_context: pair.left_context,
            right_context: pair.right_context,
            confidence: pair.confidence,
        }
    }
}

fn to_py_err(err: MineError) -> PyErr {
    match err {
        MineError::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
        other => pyo3::exceptions::PyValueError::new_err(other.to_string()),
    }
}

fn config_for(min_conf: u8, ctx_chars: usize) -> MineConfig {
    MineConfig {
        min_conf,
        ctx_chars,
        ..MineConfig::default()
    }
}

type Tiers = (Vec<PairInfo>, Vec<PairInfo>, Vec<PairInfo>, HashMap<String, usize>);

fn into_tiers(output: MineOutput) -> Tiers {
    let summary = output.summary;
    let mut stats = HashMap::new();
    stats.insert("raw".to_string(), summary.raw);
    stats.insert("dedup".to_string(), summary.dedup);
    stats.insert(summary.high_conf_key(), summary.high_conf);

    let convert = |rows: Vec<Pair>| -> Vec<PairInfo> { rows.into_iter().map(PairInfo::from).collect() };
    (convert(output.raw), convert(output.dedup), convert(output.high), stats)
}

/// Mine pairs from extracted text (pages separated by form feeds)
/// Returns: (raw, dedup, high, stats)
#[pyfunction]
#[pyo3(signature = (text, min_conf=4, ctx_chars=140))]
fn mine_text(text: String, min_conf: u8, ctx_chars: usize) -> PyResult<Tiers> {
    let output = run_text(&text, &config_for(min_conf, ctx_chars)).map_err(to_py_err)?;
    Ok(into_tiers(output))
}

/// Mine a text file and write the CSV tiers plus stats.json into output_dir
/// Returns: HashMap<tier, count>
#[pyfunction]
#[pyo3(signature = (input_path, output_dir, min_conf=4, ctx_chars=140))]
fn mine_file_to_dir(
    input_path: String,
    output_dir: String,
    min_conf: u8,
    ctx_chars: usize,
) -> PyResult<HashMap<String, usize>> {
    let text = std::fs::read_to_string(&input_path)
        .map_err(|e| pyo3::exceptions::PyIOError::new_err(format!("Failed to read {}: {}", input_path, e)))?;
    let output = run_text(&text, &config_for(min_conf, ctx_chars)).map_err(to_py_err)?;
    write_outputs(&output, Path::new(&output_dir)).map_err(to_py_err)?;
    Ok(into_tiers(output).3)
}

#[pymodule]
fn rust_gloss_mine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_text, m)?)?;
    m.add_function(wrap_pyfunction!(mine_file_to_dir, m)?)?;
    m.add_class::<PairInfo>()?;
    Ok(())
}
