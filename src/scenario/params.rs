//! Scenario parameters and their application-defined ranges

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One snapshot of every economic input to a scenario
///
/// Rates are yearly fractions (0.08 = 8%/yr). Money amounts are in a single
/// unspecified currency. Nothing here is validated: the core accepts any value
/// and ranges in [`PARAMETER_RANGES`] are host policy only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParameters {
    pub house_price: f64,
    pub deposit: f64,
    pub yearly_interest: f64,
    pub yearly_growth: f64,
    pub yearly_inflation: f64,
    pub period_months: u32,

    // Monthly running costs of owning
    pub levies: f64,
    pub tax: f64,
    pub insurance: f64,
    pub utilities: f64,
    /// Maintenance budget per year, spread evenly over the months
    pub yearly_maintenance: f64,

    pub start_rent: f64,
    pub yearly_rent_increase: f64,
    pub yearly_savings_interest: f64,
    pub rent_to_buy_delay: u32,
    pub monthly_investment: f64,
    pub rental_income: f64,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            house_price: 2_600_000.0,
            deposit: 50_000.0,
            yearly_interest: 0.09,
            yearly_growth: 0.08,
            yearly_inflation: 0.06,
            period_months: 15 * 12,
            levies: 300.0,
            tax: 1_100.0,
            insurance: 1_100.0,
            utilities: 500.0,
            yearly_maintenance: 20_000.0,
            start_rent: 10_455.0,
            yearly_rent_increase: 0.1,
            yearly_savings_interest: 0.035,
            rent_to_buy_delay: 7 * 12,
            monthly_investment: 5_000.0,
            rental_income: 10_455.0,
        }
    }
}

impl ScenarioParameters {
    /// Total monthly cost of owning, with maintenance amortized to a month
    pub fn monthly_expenses(&self) -> f64 {
        self.levies + self.tax + self.insurance + self.utilities + self.yearly_maintenance / 12.0
    }

    /// Read a parameter by its canonical name
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "house_price" => self.house_price,
            "deposit" => self.deposit,
            "yearly_interest" => self.yearly_interest,
            "yearly_growth" => self.yearly_growth,
            "yearly_inflation" => self.yearly_inflation,
            "period_months" => self.period_months as f64,
            "levies" => self.levies,
            "tax" => self.tax,
            "insurance" => self.insurance,
            "utilities" => self.utilities,
            "yearly_maintenance" => self.yearly_maintenance,
            "start_rent" => self.start_rent,
            "yearly_rent_increase" => self.yearly_rent_increase,
            "yearly_savings_interest" => self.yearly_savings_interest,
            "rent_to_buy_delay" => self.rent_to_buy_delay as f64,
            "monthly_investment" => self.monthly_investment,
            "rental_income" => self.rental_income,
            _ => return None,
        };
        Some(value)
    }

    /// Set a parameter by its canonical name
    ///
    /// Month counts must be whole and non-negative; every other value is
    /// taken as given.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "house_price" => self.house_price = value,
            "deposit" => self.deposit = value,
            "yearly_interest" => self.yearly_interest = value,
            "yearly_growth" => self.yearly_growth = value,
            "yearly_inflation" => self.yearly_inflation = value,
            "period_months" => self.period_months = whole_months(name, value)?,
            "levies" => self.levies = value,
            "tax" => self.tax = value,
            "insurance" => self.insurance = value,
            "utilities" => self.utilities = value,
            "yearly_maintenance" => self.yearly_maintenance = value,
            "start_rent" => self.start_rent = value,
            "yearly_rent_increase" => self.yearly_rent_increase = value,
            "yearly_savings_interest" => self.yearly_savings_interest = value,
            "rent_to_buy_delay" => self.rent_to_buy_delay = whole_months(name, value)?,
            "monthly_investment" => self.monthly_investment = value,
            "rental_income" => self.rental_income = value,
            _ => return Err(Error::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    /// Parameters whose current value lies outside the application range
    pub fn out_of_range(&self) -> Vec<(&'static ParameterRange, f64)> {
        PARAMETER_RANGES
            .iter()
            .filter_map(|range| {
                let value = self.get(range.name)?;
                (!range.contains(value)).then_some((range, value))
            })
            .collect()
    }
}

fn whole_months(name: &str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(Error::InvalidMonths { name: name.to_string(), value })
    }
}

/// Valid range and step for one named parameter, as offered by the host UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub name: &'static str,
    pub title: &'static str,
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl ParameterRange {
    /// Whether `value` lies within the inclusive range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

pub static PARAMETER_RANGES: [ParameterRange; 17] = [
    ParameterRange { name: "house_price", title: "House Price", start: 600_000.0, end: 3_000_000.0, step: 100_000.0 },
    ParameterRange { name: "deposit", title: "Deposit", start: 0.0, end: 2_000_000.0, step: 10_000.0 },
    ParameterRange { name: "yearly_interest", title: "Bond Interest (yearly)", start: 0.06, end: 0.11, step: 0.005 },
    ParameterRange { name: "yearly_growth", title: "Property Growth (yearly)", start: -0.015, end: 0.12, step: 0.005 },
    ParameterRange { name: "yearly_inflation", title: "Inflation (yearly)", start: 0.04, end: 0.07, step: 0.005 },
    ParameterRange { name: "period_months", title: "Bond Period (months)", start: 60.0, end: 360.0, step: 1.0 },
    ParameterRange { name: "levies", title: "Levies (monthly)", start: 0.0, end: 5_000.0, step: 100.0 },
    ParameterRange { name: "tax", title: "Tax (monthly)", start: 0.0, end: 5_000.0, step: 100.0 },
    ParameterRange { name: "insurance", title: "Insurance (monthly)", start: 0.0, end: 5_000.0, step: 100.0 },
    ParameterRange { name: "utilities", title: "Additional Utilities (monthly)", start: 0.0, end: 5_000.0, step: 100.0 },
    ParameterRange { name: "yearly_maintenance", title: "Maintenance (yearly)", start: 0.0, end: 40_000.0, step: 1_000.0 },
    ParameterRange { name: "start_rent", title: "Rent", start: 4_000.0, end: 20_000.0, step: 100.0 },
    ParameterRange { name: "yearly_rent_increase", title: "Rent Increase", start: 0.05, end: 0.15, step: 0.01 },
    ParameterRange { name: "yearly_savings_interest", title: "Interest on Savings (yearly)", start: 0.001, end: 0.1, step: 0.001 },
    ParameterRange { name: "rent_to_buy_delay", title: "Buy Delay (months)", start: 3.0, end: 360.0, step: 1.0 },
    ParameterRange { name: "monthly_investment", title: "Monthly Investment", start: 0.0, end: 50_000.0, step: 500.0 },
    ParameterRange { name: "rental_income", title: "Rental Income (monthly)", start: 0.0, end: 40_000.0, step: 100.0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_monthly_expenses() {
        let params = ScenarioParameters::default();
        // 300 + 1100 + 1100 + 500 + 20000/12
        let expected = 3_000.0 + 20_000.0 / 12.0;
        assert!((params.monthly_expenses() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_get_set_by_name() {
        let mut params = ScenarioParameters::default();
        params.set("house_price", 1_800_000.0).unwrap();
        params.set("period_months", 240.0).unwrap();

        assert_eq!(params.get("house_price"), Some(1_800_000.0));
        assert_eq!(params.period_months, 240);
        assert_eq!(params.get("nonsense"), None);
    }

    #[test]
    fn test_every_range_names_a_parameter() {
        let params = ScenarioParameters::default();
        for range in PARAMETER_RANGES.iter() {
            assert!(params.get(range.name).is_some(), "unknown range name {}", range.name);
        }
    }

    #[test]
    fn test_rejects_fractional_months() {
        let mut params = ScenarioParameters::default();
        assert!(matches!(
            params.set("rent_to_buy_delay", 12.5),
            Err(Error::InvalidMonths { .. })
        ));
        assert!(params.set("period_months", -1.0).is_err());
        assert!(matches!(params.set("colour", 1.0), Err(Error::UnknownParameter(_))));
    }

    #[test]
    fn test_out_of_range_flags_only_offenders() {
        let params = ScenarioParameters::default();
        assert!(params.out_of_range().is_empty());

        let mut params = params;
        params.house_price = 5_000_000.0;
        let flagged = params.out_of_range();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0.name, "house_price");
    }

    #[test]
    fn test_json_defaults_fill_missing_fields() {
        let params: ScenarioParameters = serde_json::from_str(r#"{"house_price": 1500000}"#).unwrap();
        assert_eq!(params.house_price, 1_500_000.0);
        assert_eq!(params.deposit, 50_000.0);
    }
}
