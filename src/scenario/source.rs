//! Parameter sources: where a scenario's inputs come from

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::debug;

use crate::error::{Error, Result};
use super::params::ScenarioParameters;

/// Supplies one consistent snapshot of scenario parameters per recompute
pub trait ParameterSource {
    fn snapshot(&self) -> Result<ScenarioParameters>;
}

impl ParameterSource for ScenarioParameters {
    fn snapshot(&self) -> Result<ScenarioParameters> {
        Ok(*self)
    }
}

/// Named numeric values over the canonical parameter names
///
/// Names that are not given fall back to [`ScenarioParameters::default`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedParameters {
    values: BTreeMap<String, f64>,
}

/// Raw CSV row of a `name,value` parameter file
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    value: f64,
}

impl NamedParameters {
    /// Empty set: every parameter takes its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one named value, replacing any earlier one
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Value given for `name`, if any
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of named values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no value was given
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply a `name=value` assignment, as given on the command line
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let malformed = || Error::MalformedAssignment(assignment.to_string());
        let (name, value) = assignment.split_once('=').ok_or_else(malformed)?;
        let value: f64 = value.trim().parse().map_err(|_| malformed())?;
        self.insert(name.trim(), value);
        Ok(())
    }

    /// Read a JSON object mapping parameter names to numbers
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let values: BTreeMap<String, f64> = serde_json::from_reader(reader)?;
        Ok(Self { values })
    }

    /// Read a two-column `name,value` CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = Reader::from_reader(reader);
        let mut named = Self::new();

        for result in csv_reader.deserialize() {
            let row: CsvRow = result?;
            named.insert(row.name.trim(), row.value);
        }

        Ok(named)
    }

    /// Load a parameter file, choosing the format from its extension
    ///
    /// `.csv` files are read as `name,value` rows; anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let named = if is_csv {
            Self::from_csv_reader(file)?
        } else {
            Self::from_json_reader(file)?
        };
        debug!("loaded {} parameters from {}", named.len(), path.display());
        Ok(named)
    }

    /// Layer `other` on top of these values
    pub fn merge(&mut self, other: NamedParameters) {
        self.values.extend(other.values);
    }
}

impl ParameterSource for NamedParameters {
    fn snapshot(&self) -> Result<ScenarioParameters> {
        let mut params = ScenarioParameters::default();
        for (name, &value) in &self.values {
            params.set(name, value)?;
        }
        Ok(params)
    }
}
