//! Pure-rental projection: rent indefinitely and save what buying would cost

use log::debug;

use super::rates::{escalate_yearly, monthly_rate};
use super::series::{BuySeries, RentSeries};

/// Project the savings of a renter against the matching buy case
///
/// The renter starts with the cash the buyer spends at month 0, net of the
/// first month's rent. Every later month the renter banks the buyer's bond
/// repayment and running expenses, pays rent, and earns compounded monthly
/// interest on the prior balance. Rent steps up by `yearly_rent_increase`
/// on each 12-month boundary.
pub fn rent(
    start_rent: f64,
    yearly_rent_increase: f64,
    yearly_savings_interest: f64,
    buy_data: &BuySeries,
) -> RentSeries {
    let period = buy_data.month.len();
    let mut data = RentSeries::with_capacity(period);
    if period == 0 {
        return data;
    }

    let savings_rate = monthly_rate(yearly_savings_interest);
    debug!("rent: start_rent={:.2} period={}", start_rent, period);

    data.month.extend_from_slice(&buy_data.month);
    data.savings.push(buy_data.outgoings(0) - start_rent);
    data.rent.push(start_rent);
    data.rent_accum.push(start_rent);
    data.interest.push(0.0);
    data.interest_accum.push(0.0);

    for m in 1..period {
        let prev = m - 1;

        let rent = escalate_yearly(m, data.rent[prev], yearly_rent_increase);
        let interest = data.savings[prev] * savings_rate;
        let savings = data.savings[prev] + interest + buy_data.outgoings(m) - rent;

        data.rent.push(rent);
        data.rent_accum.push(data.rent_accum[prev] + rent);
        data.interest.push(interest);
        data.interest_accum.push(data.interest_accum[prev] + interest);
        data.savings.push(savings);
    }

    data
}
