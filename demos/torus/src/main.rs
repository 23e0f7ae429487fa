//! torus: run one torus travelers simulation and print its trace stream.
//!
//! Trace lines go to stdout (or a CSV file with `--csv`); logs go to stderr.
//!
//! ```text
//! torus --seed 7 --travelers 5 --wild 3 --traps 4 > run.txt
//! RUST_LOG=tt_agent=trace torus -v
//! ```

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tt_core::TravelConfig;
use tt_output::{CsvSink, CsvWriter, TextSink, TraceOutput};
use tt_sim::SimBuilder;

#[derive(Parser)]
#[command(name = "torus")]
#[command(about = "Travelers, wild travelers and traps on a wrap-around grid")]
struct Cli {
    /// JSON file with a (partial) TravelConfig; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed; drawn fresh (and logged) when neither this flag nor the
    /// config file sets one
    #[arg(long)]
    seed: Option<u64>,

    /// Board width
    #[arg(long)]
    width: Option<u32>,

    /// Board height
    #[arg(long)]
    height: Option<u32>,

    /// Number of travelers (at most 26)
    #[arg(long)]
    travelers: Option<u32>,

    /// Number of wild travelers
    #[arg(long)]
    wild: Option<u32>,

    /// Number of traps
    #[arg(long)]
    traps: Option<u32>,

    /// Write traces as CSV to this file instead of stdout
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn travel_config(&self) -> Result<TravelConfig> {
        let (mut config, file_seed) = match &self.config {
            Some(path) => load_config(path)?,
            None       => (TravelConfig::default(), false),
        };
        match self.seed {
            Some(v) => config.seed = v,
            None if !file_seed => {
                config.seed = rand::random();
                info!(seed = config.seed, "drew a fresh seed");
            }
            None => {}
        }
        if let Some(v) = self.width     { config.width = v; }
        if let Some(v) = self.height    { config.height = v; }
        if let Some(v) = self.travelers { config.travelers = v; }
        if let Some(v) = self.wild      { config.wild_spawns = v; }
        if let Some(v) = self.traps     { config.traps = v; }
        Ok(config)
    }
}

/// Load a (partial) config file.  The flag tells whether it sets `seed`.
fn load_config(path: &Path) -> Result<(TravelConfig, bool)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let has_seed = value.get("seed").is_some();
    let config = serde_json::from_value(value)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok((config, has_seed))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.travel_config()?;
    info!(?config, "configuration");
    let mut sim = SimBuilder::new(config).build()?;

    let (summary, error) = match &cli.csv {
        Some(path) => {
            let mut sink: CsvSink = TraceOutput::new(
                CsvWriter::new(path).with_context(|| format!("creating {}", path.display()))?,
            );
            let summary = sim.run(&mut sink).await?;
            (summary, sink.take_error())
        }
        None => {
            let mut sink = TextSink::text(BufWriter::new(io::stdout().lock()));
            let summary = sim.run(&mut sink).await?;
            (summary, sink.take_error())
        }
    };
    if let Some(e) = error {
        return Err(e).context("writing traces");
    }

    info!(
        sequences = summary.total(),
        finished = summary.finished,
        stuck = summary.stuck,
        trapped = summary.trapped,
        disappeared = summary.disappeared,
        "done"
    );
    Ok(())
}
