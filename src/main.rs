//! Homework CLI
//!
//! Runs one scenario and prints the ROI summary and cost breakdowns

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use homework::scenario::{update, CsvSink, DisplaySink, NamedParameters, SummarySink};

#[derive(Parser, Debug)]
#[command(name = "homework", about = "Compare buy, rent, rent-to-buy and buy-and-rent strategies")]
struct Cli {
    /// Parameter file (.json object or .csv with name,value rows)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Override a parameter, e.g. --set house_price=1800000
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,

    /// Write every series as CSV into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the full results as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut named = match &cli.params {
        Some(path) => NamedParameters::from_path(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => NamedParameters::new(),
    };
    for assignment in &cli.overrides {
        named
            .apply_assignment(assignment)
            .with_context(|| format!("invalid override {assignment:?}"))?;
    }

    let mut sinks: Vec<Box<dyn DisplaySink>> = Vec::new();
    if let Some(dir) = &cli.output_dir {
        sinks.push(Box::new(CsvSink::new(dir)));
    }
    if !cli.json {
        sinks.push(Box::new(SummarySink::new(io::stdout())));
    }

    let mut fan_out = FanOut(sinks);
    let results = update(&named, &mut fan_out).context("scenario recompute failed")?;

    if cli.json {
        serde_json::to_writer_pretty(io::stdout(), &results).context("failed to write JSON")?;
        println!();
    }

    Ok(())
}

/// Forwards each result set to several sinks in order
struct FanOut(Vec<Box<dyn DisplaySink>>);

impl DisplaySink for FanOut {
    fn render(&mut self, results: &homework::ScenarioResults) -> homework::Result<()> {
        for sink in &mut self.0 {
            sink.render(results)?;
        }
        Ok(())
    }
}
