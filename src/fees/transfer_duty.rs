//! Progressive transfer duty schedule
//!
//! Rates valid for March 2020 to February 2021.

/// One bracket of the transfer duty schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DutyBracket {
    /// Inclusive upper bound of the bracket (`f64::INFINITY` for the last one)
    pub upper: f64,
    /// Amount above which the marginal rate applies
    pub threshold: f64,
    /// Marginal rate on the excess over `threshold`
    pub rate: f64,
    /// Duty owed on the first `threshold` of the price
    pub base: f64,
}

/// Transfer duty brackets, ordered by upper bound
pub static TRANSFER_DUTY_BRACKETS: [DutyBracket; 6] = [
    DutyBracket { upper: 1_000_000.0, threshold: 0.0, rate: 0.0, base: 0.0 },
    DutyBracket { upper: 1_375_000.0, threshold: 1_000_000.0, rate: 0.03, base: 0.0 },
    DutyBracket { upper: 1_925_000.0, threshold: 1_375_000.0, rate: 0.06, base: 11_250.0 },
    DutyBracket { upper: 2_475_000.0, threshold: 1_925_000.0, rate: 0.08, base: 44_250.0 },
    DutyBracket { upper: 11_000_000.0, threshold: 2_475_000.0, rate: 0.11, base: 88_250.0 },
    DutyBracket { upper: f64::INFINITY, threshold: 11_000_000.0, rate: 0.13, base: 1_026_000.0 },
];

/// Transfer duty owed on a purchase price
///
/// Prices at or below 1,000,000 (negative prices included) owe nothing. A NaN
/// price falls through every comparison and lands in the top bracket.
pub fn transfer_duty(purchase_price: f64) -> f64 {
    let bracket = TRANSFER_DUTY_BRACKETS
        .iter()
        .find(|b| purchase_price <= b.upper)
        .unwrap_or(&TRANSFER_DUTY_BRACKETS[TRANSFER_DUTY_BRACKETS.len() - 1]);

    (purchase_price - bracket.threshold) * bracket.rate + bracket.base
}
