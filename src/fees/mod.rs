//! One-off purchase fees and bond repayment arithmetic
//!
//! Pure functions with no state. Inputs are never validated: the schedules
//! accept any numeric value and the caller owns the input domain.

mod transfer_duty;
mod bond;

pub use transfer_duty::{transfer_duty, DutyBracket, TRANSFER_DUTY_BRACKETS};
pub use bond::{
    amortized_payment, bond_registration_cost, upfront_purchase_cost,
    ATTORNEY_BASE_FEE, DEEDS_OFFICE_FEE, PETTY_FEES, REGISTRATION_RATE,
    REGISTRATION_THRESHOLD,
};
