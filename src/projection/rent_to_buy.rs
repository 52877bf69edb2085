//! Rent first, buy a growth-adjusted house once the delay has elapsed

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::fees::{bond_registration_cost, transfer_duty};
use super::buy::buy;
use super::series::{BuySeries, RentSeries};

/// Granularity of the affordable-deposit search
pub const DEPOSIT_STEP: f64 = 1_000.0;

/// Outcome of the affordable-deposit search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordableDeposit {
    pub deposit: f64,
    pub transfer_duty: f64,
    pub registration_cost: f64,
    /// Number of increments taken
    pub steps: u64,
    /// True when the iteration cap stopped the search before savings ran out
    pub capped: bool,
}

impl AffordableDeposit {
    /// Deposit plus both fees
    pub fn upfront_cost(&self) -> f64 {
        self.deposit + self.transfer_duty + self.registration_cost
    }
}

/// Search for the largest deposit the available savings can carry
///
/// Raises the deposit in steps of [`DEPOSIT_STEP`], re-pricing duty and
/// registration on the shrinking bond at each step, and stops at the first
/// step whose total reaches `savings`. The fees at each step are priced on
/// the deposit before the increment, so the final total may overshoot the
/// savings by up to one step.
///
/// The search runs at most `price / 1000 + 1` steps, and the deposit it
/// returns always lies in `[0, price]`. Fees are re-priced whenever the
/// deposit had to be clamped.
pub fn max_affordable_deposit(price: f64, savings: f64) -> AffordableDeposit {
    // Saturating cast: NaN and negative prices give a single step, huge prices the u64 ceiling
    let max_steps = ((price / DEPOSIT_STEP) as u64).saturating_add(1);

    let mut deposit = 0.0;
    let mut duty = 0.0;
    let mut cost = 0.0;
    let mut steps = 0;
    let mut capped = false;

    while deposit + duty + cost < savings {
        if steps == max_steps {
            warn!(
                "deposit search capped after {} steps: savings {:.2} cover the whole price {:.2}",
                steps, savings, price
            );
            capped = true;
            break;
        }
        duty = transfer_duty(price - deposit);
        cost = bond_registration_cost(price - deposit);
        deposit += DEPOSIT_STEP;
        steps += 1;
    }

    let clamped = deposit.min(price).max(0.0);
    if clamped != deposit || capped {
        deposit = clamped;
        duty = transfer_duty(price - deposit);
        cost = bond_registration_cost(price - deposit);
    }

    AffordableDeposit {
        deposit,
        transfer_duty: duty,
        registration_cost: cost,
        steps,
        capped,
    }
}

/// Project renting for `delay_months`, then buying at the grown price
///
/// The purchase uses the house value, renter savings and running expenses
/// reached at the delay boundary, a deposit from [`max_affordable_deposit`],
/// and the remaining `period - delay` months as the bond term. Month labels
/// are shifted by the delay so the series lines up after the rent phase.
pub fn rent_to_buy(
    delay_months: u32,
    yearly_interest: f64,
    yearly_growth: f64,
    yearly_inflation: f64,
    rent_data: &RentSeries,
    buy_data: &BuySeries,
) -> Result<BuySeries> {
    let delay = delay_months as usize;
    let period = buy_data.month.len();
    if delay >= period || delay >= rent_data.savings.len() {
        return Err(Error::DelayOutOfRange { delay: delay_months, period });
    }

    let price = buy_data.housevalue[delay];
    let savings = rent_data.savings[delay];
    let monthly_expenses = buy_data.expenses[delay];

    let affordable = max_affordable_deposit(price, savings);
    debug!(
        "rent_to_buy: delay={} price={:.2} savings={:.2} deposit={:.2} steps={}",
        delay, price, savings, affordable.deposit, affordable.steps
    );

    let remaining = (period - delay) as u32;
    let mut data = buy(
        price,
        affordable.deposit,
        yearly_interest,
        remaining,
        yearly_growth,
        monthly_expenses,
        yearly_inflation,
    );
    data.shift_months(delay_months);

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::upfront_purchase_cost;
    use crate::projection::{buy, rent, MonthlySeries};
    use approx::assert_relative_eq;

    fn reference_inputs() -> (BuySeries, RentSeries) {
        let buy_data = buy(2_600_000.0, 50_000.0, 0.09, 180, 0.08, 3_000.0, 0.06);
        let rent_data = rent(10_455.0, 0.1, 0.035, &buy_data);
        (buy_data, rent_data)
    }

    #[test]
    fn test_months_shifted_by_delay() {
        let (buy_data, rent_data) = reference_inputs();
        let data = rent_to_buy(84, 0.09, 0.08, 0.06, &rent_data, &buy_data).unwrap();

        assert_eq!(data.month[0], 84);
        assert_eq!(data.len(), 180 - 84);
        assert_eq!(data.final_month(), Some(179));
        for (name, values) in data.columns() {
            assert_eq!(values.len(), 96, "column {} has wrong length", name);
        }
    }

    #[test]
    fn test_buys_at_grown_price() {
        let (buy_data, rent_data) = reference_inputs();
        let data = rent_to_buy(36, 0.09, 0.08, 0.06, &rent_data, &buy_data).unwrap();

        assert_eq!(data.housevalue[0], buy_data.housevalue[36]);
        assert_eq!(data.expenses[0], buy_data.expenses[36]);
        assert_relative_eq!(
            data.bond_outstanding[0],
            buy_data.housevalue[36] - data.deposit,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_deposit_search_stops_at_savings() {
        let price = 3_000_000.0;
        let savings = 400_000.0;
        let found = max_affordable_deposit(price, savings);

        assert!(!found.capped);
        assert_eq!(found.deposit % DEPOSIT_STEP, 0.0);
        assert!(found.upfront_cost() >= savings);
        // One step earlier the buyer could still not cover the total. That
        // step's fees were priced on the deposit before its own increment.
        let previous = found.deposit - DEPOSIT_STEP;
        let priced_on = previous - DEPOSIT_STEP;
        let previous_fees = upfront_purchase_cost(price, priced_on) - priced_on;
        assert!(previous + previous_fees < savings);
    }

    #[test]
    fn test_deposit_search_overshoot_bounded() {
        let found = max_affordable_deposit(2_000_000.0, 250_000.0);
        assert!(found.upfront_cost() - 250_000.0 <= DEPOSIT_STEP);
    }

    #[test]
    fn test_no_savings_means_no_deposit() {
        let found = max_affordable_deposit(2_000_000.0, 0.0);
        assert_eq!(found.deposit, 0.0);
        assert_eq!(found.steps, 0);

        let found = max_affordable_deposit(2_000_000.0, -10_000.0);
        assert_eq!(found.deposit, 0.0);
    }

    #[test]
    fn test_unbounded_savings_are_capped_at_price() {
        let found = max_affordable_deposit(10_000.0, f64::INFINITY);
        assert!(found.capped);
        assert_eq!(found.steps, 11);
        assert_eq!(found.deposit, 10_000.0);

        let found = max_affordable_deposit(f64::INFINITY, 5_000.0);
        assert!(!found.capped);
        assert!(found.deposit.is_finite());

        // NaN fees end the search after the first step
        let found = max_affordable_deposit(f64::NAN, 5_000.0);
        assert!(!found.capped);
        assert_eq!(found.steps, 1);
    }

    #[test]
    fn test_deposit_never_exceeds_uneven_price() {
        let found = max_affordable_deposit(10_500.0, 17_000.0);
        assert!(!found.capped);
        assert_eq!(found.steps, 11);
        assert_eq!(found.deposit, 10_500.0);
        assert_eq!(found.transfer_duty, transfer_duty(0.0));
        assert_eq!(found.registration_cost, bond_registration_cost(0.0));

        let data = buy(10_500.0, found.deposit, 0.09, 12, 0.0, 0.0, 0.0);
        assert!(data.bond_outstanding.iter().all(|&b| b >= 0.0));
    }

    #[test]
    fn test_delay_beyond_horizon() {
        let (buy_data, rent_data) = reference_inputs();
        let err = rent_to_buy(180, 0.09, 0.08, 0.06, &rent_data, &buy_data).unwrap_err();
        assert!(matches!(err, Error::DelayOutOfRange { delay: 180, period: 180 }));
    }

    #[test]
    fn test_zero_delay_buys_immediately() {
        let (buy_data, rent_data) = reference_inputs();
        let data = rent_to_buy(0, 0.09, 0.08, 0.06, &rent_data, &buy_data).unwrap();
        assert_eq!(data.month[0], 0);
        assert_eq!(data.len(), 180);
    }

    #[test]
    fn test_idempotent() {
        let (buy_data, rent_data) = reference_inputs();
        let a = rent_to_buy(84, 0.09, 0.08, 0.06, &rent_data, &buy_data).unwrap();
        let b = rent_to_buy(84, 0.09, 0.08, 0.06, &rent_data, &buy_data).unwrap();
        assert_eq!(a, b);
    }
}
