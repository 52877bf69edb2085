//! Investment-property projection: buy to let, rent a home elsewhere

use log::debug;

use super::rates::{escalate_yearly, monthly_rate};
use super::series::{BuyAndRentSeries, BuySeries};

/// Project an investor who lets out the property in `buy_data`
///
/// Savings open at the month-0 rental income less the personal rent. Each
/// later month they earn compounded interest, receive `monthly_investment`,
/// pay the property's bond repayment and running expenses, collect rental
/// income and pay personal rent. Both rent streams step up independently on
/// each 12-month boundary. Nett is the property's nett plus savings.
pub fn buy_and_rent(
    buy_data: &BuySeries,
    rent_expense: f64,
    rent_income: f64,
    yearly_rent_increase: f64,
    yearly_savings_interest: f64,
    monthly_investment: f64,
) -> BuyAndRentSeries {
    let period = buy_data.month.len();
    let mut data = BuyAndRentSeries::with_capacity(period);
    if period == 0 {
        return data;
    }

    let savings_rate = monthly_rate(yearly_savings_interest);
    debug!(
        "buy_and_rent: rent_in={:.2} rent_out={:.2} investment={:.2} period={}",
        rent_income, rent_expense, monthly_investment, period
    );

    let opening = rent_income - rent_expense;
    data.month.extend_from_slice(&buy_data.month);
    data.savings.push(opening);
    data.rent_in.push(rent_income);
    data.rent_in_accum.push(rent_income);
    data.rent_out.push(rent_expense);
    data.rent_out_accum.push(rent_expense);
    data.interest.push(0.0);
    data.interest_accum.push(0.0);
    data.investment_accum.push(0.0);
    data.nett.push(buy_data.nett[0] + opening);

    for m in 1..period {
        let prev = m - 1;

        let rent_in = escalate_yearly(m, data.rent_in[prev], yearly_rent_increase);
        let rent_out = escalate_yearly(m, data.rent_out[prev], yearly_rent_increase);
        let interest = data.savings[prev] * savings_rate;
        let savings = data.savings[prev] + interest + monthly_investment - buy_data.outgoings(m)
            + rent_in
            - rent_out;

        data.rent_in.push(rent_in);
        data.rent_in_accum.push(data.rent_in_accum[prev] + rent_in);
        data.rent_out.push(rent_out);
        data.rent_out_accum.push(data.rent_out_accum[prev] + rent_out);
        data.interest.push(interest);
        data.interest_accum.push(data.interest_accum[prev] + interest);
        data.investment_accum.push(data.investment_accum[prev] + monthly_investment);
        data.savings.push(savings);
        data.nett.push(buy_data.nett[m] + savings);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{buy, MonthlySeries};
    use approx::assert_relative_eq;

    fn reference_buy() -> BuySeries {
        buy(2_600_000.0, 50_000.0, 0.09, 180, 0.08, 3_000.0, 0.06)
    }

    #[test]
    fn test_opening_balance() {
        let buy_data = reference_buy();
        let data = buy_and_rent(&buy_data, 9_000.0, 12_000.0, 0.1, 0.035, 5_000.0);

        assert_eq!(data.savings[0], 3_000.0);
        assert_eq!(data.nett[0], buy_data.nett[0] + 3_000.0);
        assert_eq!(data.len(), 180);
        for (name, values) in data.columns() {
            assert_eq!(values.len(), 180, "column {} has wrong length", name);
        }
    }

    #[test]
    fn test_rent_streams_escalate_independently() {
        let buy_data = reference_buy();
        let data = buy_and_rent(&buy_data, 9_000.0, 12_000.0, 0.1, 0.035, 5_000.0);

        assert_eq!(data.rent_in[11], 12_000.0);
        assert_eq!(data.rent_out[11], 9_000.0);
        assert_relative_eq!(data.rent_in[12], 13_200.0, max_relative = 1e-12);
        assert_relative_eq!(data.rent_out[12], 9_900.0, max_relative = 1e-12);
        assert_eq!(data.rent_in[13], data.rent_in[12]);
    }

    #[test]
    fn test_savings_recurrence_and_nett() {
        let buy_data = reference_buy();
        let data = buy_and_rent(&buy_data, 9_000.0, 12_000.0, 0.1, 0.035, 5_000.0);
        let r = 1.035_f64.powf(1.0 / 12.0) - 1.0;

        for m in 1..data.len() {
            let expected = data.savings[m - 1] * (1.0 + r) + 5_000.0
                - (buy_data.bond[m] + buy_data.expenses[m])
                + data.rent_in[m]
                - data.rent_out[m];
            assert_relative_eq!(data.savings[m], expected, max_relative = 1e-9, epsilon = 1e-6);
            assert_eq!(data.nett[m], buy_data.nett[m] + data.savings[m]);
        }
        assert_relative_eq!(*data.investment_accum.last().unwrap(), 5_000.0 * 179.0, max_relative = 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let buy_data = reference_buy();
        let a = buy_and_rent(&buy_data, 9_000.0, 12_000.0, 0.1, 0.035, 5_000.0);
        let b = buy_and_rent(&buy_data, 9_000.0, 12_000.0, 0.1, 0.035, 5_000.0);
        assert_eq!(a, b);
    }
}
