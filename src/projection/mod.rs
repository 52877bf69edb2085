//! Monthly projection engine for the four housing strategies
//!
//! Buy is the base projection. Rent, rent-to-buy and buy-and-rent all read
//! from a buy series and never mutate it.

mod rates;
mod series;
mod buy;
mod rent;
mod rent_to_buy;
mod buy_and_rent;

pub use rates::{escalate_yearly, monthly_rate};
pub use series::{BuyAndRentSeries, BuySeries, MonthlySeries, RentSeries};
pub use buy::buy;
pub use rent::rent;
pub use rent_to_buy::{max_affordable_deposit, rent_to_buy, AffordableDeposit, DEPOSIT_STEP};
pub use buy_and_rent::buy_and_rent;
