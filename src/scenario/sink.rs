//! Display sinks: consumers of a finished recompute

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;

use crate::error::Result;
use crate::projection::MonthlySeries;
use super::runner::ScenarioResults;

/// Receives the full result set of each recompute
pub trait DisplaySink {
    fn render(&mut self, results: &ScenarioResults) -> Result<()>;
}

/// Write a series as CSV: a `month` column followed by every named column
pub fn write_series_csv<W: Write, S: MonthlySeries + ?Sized>(writer: W, series: &S) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    let columns = series.columns();

    let mut header = vec!["month"];
    header.extend(columns.iter().map(|(name, _)| *name));
    csv_writer.write_record(&header)?;

    for (i, month) in series.months().iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(month.to_string());
        record.extend(columns.iter().map(|(_, values)| format!("{:.8}", values[i])));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes one CSV per series into a directory
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// Sink writing into `dir`, created on first render
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Directory the CSV files are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write<S: MonthlySeries>(&self, file_name: &str, series: &S) -> Result<()> {
        let file = fs::File::create(self.dir.join(file_name))?;
        write_series_csv(file, series)
    }
}

impl DisplaySink for CsvSink {
    fn render(&mut self, results: &ScenarioResults) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        self.write("buy.csv", &results.buy)?;
        self.write("rent.csv", &results.rent)?;
        self.write("rent_to_buy.csv", &results.rent_to_buy)?;
        self.write("buy_and_rent.csv", &results.buy_and_rent)?;
        self.write("comparison.csv", &results.comparison)?;
        info!("wrote series to {}", self.dir.display());
        Ok(())
    }
}

/// Writes the ROI lines and cost breakdowns as plain text
pub struct SummarySink<W: Write> {
    out: W,
}

impl<W: Write> SummarySink<W> {
    /// Sink writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for SummarySink<W> {
    fn render(&mut self, results: &ScenarioResults) -> Result<()> {
        for roi in &results.roi {
            writeln!(self.out, "{}", roi)?;
        }
        for breakdown in &results.breakdowns {
            writeln!(self.out)?;
            writeln!(self.out, "{:?}:", breakdown.strategy)?;
            for item in &breakdown.items {
                writeln!(self.out, "  {:<18} {:>16.2}", item.label, item.amount)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{recompute, ScenarioParameters};

    #[test]
    fn test_series_csv_layout() {
        let results = recompute(&ScenarioParameters::default()).unwrap();
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &results.rent).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("month,savings,rent,rent_accum,interest,interest_accum"));
        assert!(lines.next().unwrap().starts_with("0,"));
        assert_eq!(text.lines().count(), 1 + 180);
    }

    #[test]
    fn test_summary_lists_every_strategy() {
        let results = recompute(&ScenarioParameters::default()).unwrap();
        let mut sink = SummarySink::new(Vec::new());
        sink.render(&results).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("ROI Buy: "));
        assert!(text.contains("ROI Rent: "));
        assert!(text.contains("ROI Rent2Buy: "));
        assert!(text.contains("ROI Buy&Rent: "));
        assert!(text.contains("Transfer Duty"));
    }

    #[test]
    fn test_csv_sink_writes_all_files() {
        let dir = std::env::temp_dir().join(format!("homework-sink-{}", std::process::id()));
        let results = recompute(&ScenarioParameters::default()).unwrap();
        let mut sink = CsvSink::new(&dir);
        sink.render(&results).unwrap();

        for name in ["buy.csv", "rent.csv", "rent_to_buy.csv", "buy_and_rent.csv", "comparison.csv"] {
            assert!(dir.join(name).exists(), "missing {}", name);
        }
        let comparison = fs::read_to_string(dir.join("comparison.csv")).unwrap();
        assert!(comparison.starts_with("month,buy_nett,rent_nett,buy_and_rent_nett"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
