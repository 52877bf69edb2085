//! Scenario layer: parameter snapshots in, projected strategies out
//!
//! The host supplies parameters through a [`ParameterSource`] and receives
//! results through a [`DisplaySink`]. [`recompute`] is the single synchronous
//! entry point; there is no incremental recomputation.

mod params;
mod source;
mod summary;
mod sink;
mod runner;

pub use params::{ParameterRange, ScenarioParameters, PARAMETER_RANGES};
pub use source::{NamedParameters, ParameterSource};
pub use summary::{BreakdownItem, CostBreakdown, NetWorthComparison, RoiSummary, Strategy};
pub use sink::{write_series_csv, CsvSink, DisplaySink, SummarySink};
pub use runner::{recompute, update, DelayOutcome, ScenarioResults, ScenarioRunner};
