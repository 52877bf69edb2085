//! Derived figures: return on investment, net-worth comparison, cost breakdowns

use std::fmt;

use serde::Serialize;

use crate::projection::{BuyAndRentSeries, BuySeries, MonthlySeries, RentSeries};

/// The four housing strategies being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Buy,
    Rent,
    RentToBuy,
    BuyAndRent,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Buy,
        Strategy::Rent,
        Strategy::RentToBuy,
        Strategy::BuyAndRent,
    ];

    /// Display label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Buy => "ROI Buy",
            Strategy::Rent => "ROI Rent",
            Strategy::RentToBuy => "ROI Rent2Buy",
            Strategy::BuyAndRent => "ROI Buy&Rent",
        }
    }
}

/// Terminal return for one strategy: final nett divided by final month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiSummary {
    pub strategy: Strategy,
    pub label: &'static str,
    pub value: f64,
}

impl RoiSummary {
    /// ROI value labelled with its strategy
    pub fn new(strategy: Strategy, value: f64) -> Self {
        Self { strategy, label: strategy.label(), value }
    }

    /// ROI from a nett column and its month labels
    ///
    /// A final month of 0 divides by zero; empty series give NaN.
    pub fn from_series<S: MonthlySeries>(strategy: Strategy, series: &S, nett: &[f64]) -> Self {
        let value = match (nett.last(), series.final_month()) {
            (Some(&final_nett), Some(final_month)) => final_nett / final_month as f64,
            _ => f64::NAN,
        };
        Self::new(strategy, value)
    }
}

impl fmt::Display for RoiSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.label, self.value)
    }
}

/// Nett of the full-horizon strategies side by side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthComparison {
    pub month: Vec<u32>,
    pub buy_nett: Vec<f64>,
    /// Renter savings are the renter's entire net worth
    pub rent_nett: Vec<f64>,
    pub buy_and_rent_nett: Vec<f64>,
}

impl NetWorthComparison {
    /// Collect the nett columns of the three full-horizon series
    pub fn new(buy: &BuySeries, rent: &RentSeries, buy_and_rent: &BuyAndRentSeries) -> Self {
        Self {
            month: buy.month.clone(),
            buy_nett: buy.nett.clone(),
            rent_nett: rent.savings.clone(),
            buy_and_rent_nett: buy_and_rent.nett.clone(),
        }
    }
}

impl MonthlySeries for NetWorthComparison {
    fn months(&self) -> &[u32] {
        &self.month
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("buy_nett", self.buy_nett.as_slice()),
            ("rent_nett", self.rent_nett.as_slice()),
            ("buy_and_rent_nett", self.buy_and_rent_nett.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItem {
    pub label: &'static str,
    pub amount: f64,
}

/// Itemised cumulative costs and income of one strategy over its horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub strategy: Strategy,
    pub items: Vec<BreakdownItem>,
}

impl CostBreakdown {
    fn new(strategy: Strategy) -> Self {
        Self { strategy, items: Vec::new() }
    }

    fn item(mut self, label: &'static str, amount: f64) -> Self {
        self.items.push(BreakdownItem { label, amount });
        self
    }

    /// Amount of the item labelled `label`
    pub fn get(&self, label: &str) -> Option<f64> {
        self.items.iter().find(|i| i.label == label).map(|i| i.amount)
    }

    /// Purchase costs, running costs and growth of the buy case
    pub fn buy(data: &BuySeries) -> Self {
        Self::new(Strategy::Buy)
            .item("Deposit", data.deposit)
            .item("Transfer Duty", data.transfer_duty)
            .item("Registration", data.registration_cost)
            .item("Expenses", last(&data.expenses_accum))
            .item("Bond Interest", last(&data.bond_interest_accum))
            .item("Bond Payments", last(&data.bond_accum) - data.bond.first().copied().unwrap_or(0.0))
            .item("Growth", last(&data.growth_accum))
    }

    /// Rent paid and interest earned by the renter
    pub fn rent(data: &RentSeries) -> Self {
        Self::new(Strategy::Rent)
            .item("Rent", last(&data.rent_accum))
            .item("Savings Interest", last(&data.interest_accum))
    }

    /// Rent paid up to and including the purchase month, then the purchase costs
    pub fn rent_to_buy(data: &BuySeries, rent: &RentSeries, delay: usize) -> Self {
        let rent_paid = rent.rent_accum.get(delay).copied().unwrap_or(f64::NAN);
        Self::new(Strategy::RentToBuy)
            .item("Rent", rent_paid)
            .item("Deposit", data.deposit)
            .item("Transfer Duty", data.transfer_duty)
            .item("Registration", data.registration_cost)
            .item("Expenses", last(&data.expenses_accum))
            .item("Bond Interest", last(&data.bond_interest_accum))
            .item("Growth", last(&data.growth_accum))
    }

    /// Rental income against the costs of the invested property
    pub fn buy_and_rent(data: &BuyAndRentSeries, property: &BuySeries) -> Self {
        Self::new(Strategy::BuyAndRent)
            .item("Rental Income", last(&data.rent_in_accum))
            .item("Rent", last(&data.rent_out_accum))
            .item("Savings Interest", last(&data.interest_accum))
            .item("Investment", last(&data.investment_accum))
            .item("Property Expenses", last(&property.expenses_accum))
            .item("Bond Interest", last(&property.bond_interest_accum))
    }
}

fn last(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(0.0)
}
