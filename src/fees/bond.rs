//! Bond registration cost and amortized repayment

use super::transfer_duty;

/// Bond amount below which the registration rate stops reducing the fee
pub const REGISTRATION_THRESHOLD: f64 = 100_000.0;

/// Registration fee per unit of bond above the threshold
pub const REGISTRATION_RATE: f64 = 0.01771;

pub const ATTORNEY_BASE_FEE: f64 = 5_750.0;
pub const DEEDS_OFFICE_FEE: f64 = 1_020.0;
pub const PETTY_FEES: f64 = 1_200.0;

/// Cost of registering a bond of the given size
///
/// Linear in the bond amount and deliberately not clamped: bonds far below the
/// threshold produce a negative cost.
pub fn bond_registration_cost(bond_amount: f64) -> f64 {
    (bond_amount - REGISTRATION_THRESHOLD) * REGISTRATION_RATE
        + ATTORNEY_BASE_FEE
        + DEEDS_OFFICE_FEE
        + PETTY_FEES
}

/// Fixed periodic payment that repays `principal` over `periods` at `monthly_rate`
///
/// A zero rate or zero periods divides by zero and yields NaN or Infinity.
pub fn amortized_payment(principal: f64, monthly_rate: f64, periods: u32) -> f64 {
    monthly_rate * principal / (1.0 - (1.0 + monthly_rate).powi(-(periods as i32)))
}

/// Cash needed on the day of purchase: deposit plus duty and registration on the bond
pub fn upfront_purchase_cost(price: f64, deposit: f64) -> f64 {
    let bond = price - deposit;
    deposit + transfer_duty(bond) + bond_registration_cost(bond)
}
