//! Monthly series bundles produced by the projectors

use serde::{Deserialize, Serialize};

/// Column-oriented monthly output: equal-length columns indexed by month
pub trait MonthlySeries {
    /// Month label for each row (shifted for rent-to-buy)
    fn months(&self) -> &[u32];

    /// Named monetary columns, in display order
    fn columns(&self) -> Vec<(&'static str, &[f64])>;

    fn len(&self) -> usize {
        self.months().len()
    }

    fn is_empty(&self) -> bool {
        self.months().is_empty()
    }

    /// Look up a column by name
    fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, values)| values)
    }

    fn final_month(&self) -> Option<u32> {
        self.months().last().copied()
    }
}

/// Monthly state of the straight-purchase strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuySeries {
    pub month: Vec<u32>,
    pub housevalue: Vec<f64>,
    pub growth_accum: Vec<f64>,
    pub expenses: Vec<f64>,
    pub expenses_accum: Vec<f64>,
    /// Cash out on the bond: upfront costs at month 0, the repayment afterwards
    pub bond: Vec<f64>,
    pub bond_accum: Vec<f64>,
    pub bond_outstanding: Vec<f64>,
    pub bond_interest: Vec<f64>,
    pub bond_interest_accum: Vec<f64>,
    pub nett: Vec<f64>,

    // One-time purchase figures
    pub deposit: f64,
    pub transfer_duty: f64,
    pub registration_cost: f64,
    pub monthly_payment: f64,
}

impl BuySeries {
    /// Empty buy series with room for `period` months
    pub fn with_capacity(period: usize) -> Self {
        Self {
            month: Vec::with_capacity(period),
            housevalue: Vec::with_capacity(period),
            growth_accum: Vec::with_capacity(period),
            expenses: Vec::with_capacity(period),
            expenses_accum: Vec::with_capacity(period),
            bond: Vec::with_capacity(period),
            bond_accum: Vec::with_capacity(period),
            bond_outstanding: Vec::with_capacity(period),
            bond_interest: Vec::with_capacity(period),
            bond_interest_accum: Vec::with_capacity(period),
            nett: Vec::with_capacity(period),
            deposit: 0.0,
            transfer_duty: 0.0,
            registration_cost: 0.0,
            monthly_payment: 0.0,
        }
    }

    /// Shift every month label up by `offset`
    pub fn shift_months(&mut self, offset: u32) {
        for month in &mut self.month {
            *month += offset;
        }
    }

    /// Cash spent on the purchase at month `m`: bond cash-out plus running expenses
    pub fn outgoings(&self, m: usize) -> f64 {
        self.bond[m] + self.expenses[m]
    }
}

impl MonthlySeries for BuySeries {
    fn months(&self) -> &[u32] {
        &self.month
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("housevalue", self.housevalue.as_slice()),
            ("growth_accum", self.growth_accum.as_slice()),
            ("expenses", self.expenses.as_slice()),
            ("expenses_accum", self.expenses_accum.as_slice()),
            ("bond", self.bond.as_slice()),
            ("bond_accum", self.bond_accum.as_slice()),
            ("bond_outstanding", self.bond_outstanding.as_slice()),
            ("bond_interest", self.bond_interest.as_slice()),
            ("bond_interest_accum", self.bond_interest_accum.as_slice()),
            ("nett", self.nett.as_slice()),
        ]
    }
}

/// Monthly state of the pure-rental strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentSeries {
    pub month: Vec<u32>,
    pub savings: Vec<f64>,
    pub rent: Vec<f64>,
    pub rent_accum: Vec<f64>,
    pub interest: Vec<f64>,
    pub interest_accum: Vec<f64>,
}

impl RentSeries {
    /// Empty rent series with room for `period` months
    pub fn with_capacity(period: usize) -> Self {
        Self {
            month: Vec::with_capacity(period),
            savings: Vec::with_capacity(period),
            rent: Vec::with_capacity(period),
            rent_accum: Vec::with_capacity(period),
            interest: Vec::with_capacity(period),
            interest_accum: Vec::with_capacity(period),
        }
    }
}

impl MonthlySeries for RentSeries {
    fn months(&self) -> &[u32] {
        &self.month
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("savings", self.savings.as_slice()),
            ("rent", self.rent.as_slice()),
            ("rent_accum", self.rent_accum.as_slice()),
            ("interest", self.interest.as_slice()),
            ("interest_accum", self.interest_accum.as_slice()),
        ]
    }
}

/// Monthly state of the investor who lets out a bought property and rents elsewhere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyAndRentSeries {
    pub month: Vec<u32>,
    pub savings: Vec<f64>,
    pub rent_in: Vec<f64>,
    pub rent_in_accum: Vec<f64>,
    pub rent_out: Vec<f64>,
    pub rent_out_accum: Vec<f64>,
    pub interest: Vec<f64>,
    pub interest_accum: Vec<f64>,
    pub investment_accum: Vec<f64>,
    /// Property nett plus liquid savings
    pub nett: Vec<f64>,
}

impl BuyAndRentSeries {
    /// Empty buy-and-rent series with room for `period` months
    pub fn with_capacity(period: usize) -> Self {
        Self {
            month: Vec::with_capacity(period),
            savings: Vec::with_capacity(period),
            rent_in: Vec::with_capacity(period),
            rent_in_accum: Vec::with_capacity(period),
            rent_out: Vec::with_capacity(period),
            rent_out_accum: Vec::with_capacity(period),
            interest: Vec::with_capacity(period),
            interest_accum: Vec::with_capacity(period),
            investment_accum: Vec::with_capacity(period),
            nett: Vec::with_capacity(period),
        }
    }
}

impl MonthlySeries for BuyAndRentSeries {
    fn months(&self) -> &[u32] {
        &self.month
    }

    fn columns(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("savings", self.savings.as_slice()),
            ("rent_in", self.rent_in.as_slice()),
            ("rent_in_accum", self.rent_in_accum.as_slice()),
            ("rent_out", self.rent_out.as_slice()),
            ("rent_out_accum", self.rent_out_accum.as_slice()),
            ("interest", self.interest.as_slice()),
            ("interest_accum", self.interest_accum.as_slice()),
            ("investment_accum", self.investment_accum.as_slice()),
            ("nett", self.nett.as_slice()),
        ]
    }
}
