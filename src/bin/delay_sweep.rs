//! Sweep the rent-to-buy delay and report the outcome at each step
//!
//! Writes delay_sweep.csv with one row per delay

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use homework::scenario::{NamedParameters, ParameterSource, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "delay_sweep", about = "Rent-to-buy outcome across buy delays")]
struct Cli {
    /// Parameter file (.json object or .csv with name,value rows)
    #[arg(long)]
    params: Option<PathBuf>,

    /// First delay in months
    #[arg(long, default_value_t = 3)]
    from: u32,

    /// Last delay in months (defaults to one month before the bond period ends)
    #[arg(long)]
    to: Option<u32>,

    #[arg(long, default_value_t = 1)]
    step: u32,

    #[arg(long, default_value = "delay_sweep.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let named = match &cli.params {
        Some(path) => NamedParameters::from_path(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => NamedParameters::new(),
    };
    let base = named.snapshot()?;

    if cli.step == 0 {
        bail!("--step must be at least 1");
    }
    let to = cli.to.unwrap_or(base.period_months.saturating_sub(1));
    let delays: Vec<u32> = (cli.from..=to).step_by(cli.step as usize).collect();

    println!("Sweeping {} delays over a {}-month bond...", delays.len(), base.period_months);
    let runner = ScenarioRunner::new(base);
    let outcomes = runner.sweep_delays(&delays).context("delay sweep failed")?;

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for outcome in &outcomes {
        writer.serialize(outcome)?;
    }
    writer.flush()?;

    if let Some(best) = outcomes
        .iter()
        .filter(|o| o.roi.is_finite())
        .max_by(|a, b| a.roi.total_cmp(&b.roi))
    {
        println!(
            "Best delay: {} months (deposit {:.0}, ROI {:.2})",
            best.delay_months, best.deposit, best.roi
        );
    }
    println!("Output written to {} in {:?}", cli.output.display(), start.elapsed());

    Ok(())
}
