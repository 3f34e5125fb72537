mod config;
mod error;
mod experiment;
mod model;
mod report;
mod response;
mod sampler;
mod stats;
mod stimulus;

use crate::config::Config;
use crate::experiment::Experiment;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file overriding the reference experiment.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed of the random number generator.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    log::info!("{cfg:#?}");
    let alternatives = cfg.observer.alternatives;

    let mut exp = Experiment::new(cfg, args.seed).context("failed to construct experiment")?;

    // Both curves are computed before anything is printed.
    let theoretical = exp
        .theoretical_curve()
        .context("failed to compute theoretical curve")?;
    log::info!("computed theoretical curve");
    let empirical = exp
        .run_experiment()
        .context("failed to run experiment")?;
    log::info!("completed experiment with seed {}", exp.seed());

    let mut writer = BufWriter::new(io::stdout().lock());
    report::write_theoretical(&mut writer, &theoretical).context("failed to write table")?;
    report::write_empirical(&mut writer, &empirical, alternatives)
        .context("failed to write table")?;
    writer.flush().context("failed to flush writer stream")?;

    Ok(())
}
