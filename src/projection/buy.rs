//! Straight-purchase projection: buy now with a bond over the full period

use log::debug;

use crate::fees::{amortized_payment, bond_registration_cost, transfer_duty, upfront_purchase_cost};
use super::rates::monthly_rate;
use super::series::BuySeries;

/// Project the monthly state of buying a property with a bond
///
/// # Arguments
/// * `price` - Purchase price, also taken as the month-0 house value
/// * `deposit` - Down payment that reduces the bond
/// * `yearly_interest` - Bond interest rate as a yearly fraction (0.09 = 9%)
/// * `period_months` - Bond term in months, and the length of every output column
/// * `yearly_growth` - Property growth as a yearly fraction
/// * `monthly_expenses` - Month-0 running costs (levies, tax, insurance, utilities, maintenance)
/// * `yearly_inflation` - Yearly fraction by which running costs grow
///
/// Month 0 books the upfront cash (deposit, transfer duty, registration) in
/// `bond`. Every later month books the constant amortized repayment. Nett is
/// house value less the outstanding bond; expenses and interest are tracked
/// only through their accumulator columns.
pub fn buy(
    price: f64,
    deposit: f64,
    yearly_interest: f64,
    period_months: u32,
    yearly_growth: f64,
    monthly_expenses: f64,
    yearly_inflation: f64,
) -> BuySeries {
    let period = period_months as usize;
    let mut data = BuySeries::with_capacity(period);
    if period == 0 {
        return data;
    }

    let principal = price - deposit;
    let interest_rate = monthly_rate(yearly_interest);
    let growth_rate = monthly_rate(yearly_growth);
    let inflation_rate = monthly_rate(yearly_inflation);

    data.deposit = deposit;
    data.transfer_duty = transfer_duty(principal);
    data.registration_cost = bond_registration_cost(principal);
    data.monthly_payment = amortized_payment(principal, interest_rate, period_months);

    debug!(
        "buy: price={:.2} deposit={:.2} period={} payment={:.2}",
        price, deposit, period_months, data.monthly_payment
    );

    // Month 0
    let upfront = upfront_purchase_cost(price, deposit);
    data.month.push(0);
    data.housevalue.push(price);
    data.growth_accum.push(0.0);
    data.expenses.push(monthly_expenses);
    data.expenses_accum.push(monthly_expenses);
    data.bond.push(upfront);
    data.bond_accum.push(upfront);
    data.bond_outstanding.push(principal);
    data.bond_interest.push(0.0);
    data.bond_interest_accum.push(0.0);
    data.nett.push(price - principal);

    for m in 1..period {
        let prev = m - 1;

        let housevalue = data.housevalue[prev] * (1.0 + growth_rate);
        let expenses = data.expenses[prev] * (1.0 + inflation_rate);
        let interest = data.bond_outstanding[prev] * interest_rate;
        // May dip slightly below zero at the end of the schedule; left as is
        let outstanding = data.bond_outstanding[prev] + interest - data.monthly_payment;

        data.month.push(m as u32);
        data.growth_accum.push(data.growth_accum[prev] + (housevalue - data.housevalue[prev]));
        data.housevalue.push(housevalue);
        data.expenses_accum.push(data.expenses_accum[prev] + expenses);
        data.expenses.push(expenses);
        data.bond.push(data.monthly_payment);
        data.bond_accum.push(data.bond_accum[prev] + data.monthly_payment);
        data.bond_interest.push(interest);
        data.bond_interest_accum.push(data.bond_interest_accum[prev] + interest);
        data.bond_outstanding.push(outstanding);
        data.nett.push(housevalue - outstanding);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::MonthlySeries;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_buy() -> BuySeries {
        buy(2_600_000.0, 50_000.0, 0.09, 180, 0.08, 3_000.0, 0.06)
    }

    #[test]
    fn test_month_zero_state() {
        let data = reference_buy();

        assert_eq!(data.month[0], 0);
        assert_eq!(data.housevalue[0], 2_600_000.0);
        assert_eq!(data.bond_outstanding[0], 2_550_000.0);
        assert_eq!(data.bond_interest[0], 0.0);
        assert_eq!(data.expenses[0], 3_000.0);
        assert_eq!(data.nett[0], 50_000.0);
        assert_abs_diff_eq!(data.bond[0], 50_000.0 + 96_500.0 + 51_359.5, epsilon = 1e-6);
    }

    #[test]
    fn test_all_columns_match_period() {
        let data = reference_buy();
        assert_eq!(data.len(), 180);
        for (name, values) in data.columns() {
            assert_eq!(values.len(), 180, "column {} has wrong length", name);
        }
    }

    #[test]
    fn test_constant_payment_matches_closed_form() {
        let data = reference_buy();
        let r = 1.09_f64.powf(1.0 / 12.0) - 1.0;
        let expected = r * 2_550_000.0 / (1.0 - (1.0 + r).powi(-180));

        assert_relative_eq!(data.bond[1], expected, max_relative = 1e-12);
        assert_relative_eq!(data.bond[1], 25_333.753_529, max_relative = 1e-9);
        assert!(data.bond[1..].iter().all(|&p| p == data.bond[1]));
    }

    #[test]
    fn test_growth_compounds_to_yearly_factor() {
        let data = reference_buy();
        assert_relative_eq!(data.housevalue[12], 2_600_000.0 * 1.08, max_relative = 1e-10);
        assert_relative_eq!(data.expenses[12], 3_000.0 * 1.06, max_relative = 1e-10);
        assert_relative_eq!(
            data.growth_accum[12],
            data.housevalue[12] - data.housevalue[0],
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_zero_growth_keeps_value_flat() {
        let data = buy(1_500_000.0, 100_000.0, 0.09, 120, 0.0, 2_000.0, 0.06);
        assert!(data.housevalue.iter().all(|&v| v == 1_500_000.0));
        assert!(data.growth_accum.iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_interest_and_balance_recurrence() {
        let data = reference_buy();
        let r = 1.09_f64.powf(1.0 / 12.0) - 1.0;
        for m in 1..data.len() {
            assert_relative_eq!(data.bond_interest[m], data.bond_outstanding[m - 1] * r, max_relative = 1e-12);
            assert_relative_eq!(
                data.nett[m],
                data.housevalue[m] - data.bond_outstanding[m],
                max_relative = 1e-12
            );
        }
        // One repayment short of the full term: roughly one payment left
        let last = *data.bond_outstanding.last().unwrap();
        assert!(last > 0.0 && last < data.monthly_payment);
    }

    #[test]
    fn test_accumulators_are_running_totals() {
        let data = reference_buy();
        let expenses_total: f64 = data.expenses.iter().sum();
        let interest_total: f64 = data.bond_interest.iter().sum();
        assert_relative_eq!(*data.expenses_accum.last().unwrap(), expenses_total, max_relative = 1e-12);
        assert_relative_eq!(*data.bond_interest_accum.last().unwrap(), interest_total, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_period() {
        let data = buy(1_000_000.0, 0.0, 0.09, 0, 0.08, 1_000.0, 0.06);
        assert!(data.is_empty());
        assert!(data.columns().iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(reference_buy(), reference_buy());
    }
}
