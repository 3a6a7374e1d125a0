use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use rust_gloss_mine::logger::init_logging;
use rust_gloss_mine::{MineConfig, MineError, TextBlob, export, pipeline, split_pages};

/// Exit status when the input holds no usable text.
const EXIT_EMPTY_TEXT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "rust-gloss-mine")]
#[command(version, about = "Mine Guaraní–Spanish headword/gloss pairs from extracted grammar text", long_about = None)]
struct Cli {
    /// Extracted text, pages separated by form feeds
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "out_restivo")]
    outdir: PathBuf,

    /// Minimum confidence for the high-confidence tier
    #[arg(long)]
    min_conf: Option<u8>,

    /// Context characters left/right of a match
    #[arg(long)]
    ctx: Option<usize>,

    /// TOML file with mining options; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input already carries [[[PAGE n]]] markers
    #[arg(long)]
    marked: bool,

    /// Also write every tier into one pairs.json
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match mine(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(e.downcast_ref::<MineError>(), Some(MineError::EmptyText)) => {
            error!("Empty text: {}", cli.input.display());
            ExitCode::from(EXIT_EMPTY_TEXT)
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<MineConfig> {
    let mut config = match &cli.config {
        Some(path) => MineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => MineConfig::default(),
    };
    if let Some(min_conf) = cli.min_conf {
        config.min_conf = min_conf;
    }
    if let Some(ctx) = cli.ctx {
        config.ctx_chars = ctx;
    }
    config.validate()?;
    Ok(config)
}

fn mine(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input: {}", cli.input.display()))?;
    let blob = if cli.marked {
        TextBlob::from_marked(&text)
    } else {
        TextBlob::from_pages(&split_pages(&text, config.page_chunk_chars))
    };

    // EmptyText must stay the root error for the exit status mapping
    let output = pipeline::run(&blob, &config)?;

    export::write_outputs(&output, &cli.outdir)
        .with_context(|| format!("Failed to export to: {}", cli.outdir.display()))?;
    if cli.json {
        export::write_json(&output, &cli.outdir)
            .with_context(|| format!("Failed to export to: {}", cli.outdir.display()))?;
    }

    println!("{}", serde_json::to_string(&output.summary)?);
    Ok(())
}
