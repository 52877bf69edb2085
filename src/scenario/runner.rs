//! Scenario orchestration: one full recompute per parameter snapshot

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::projection::{
    buy, buy_and_rent, rent, rent_to_buy, BuyAndRentSeries, BuySeries, RentSeries,
};
use super::params::ScenarioParameters;
use super::sink::DisplaySink;
use super::source::ParameterSource;
use super::summary::{CostBreakdown, NetWorthComparison, RoiSummary, Strategy};

/// Everything produced by one recompute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResults {
    pub params: ScenarioParameters,
    pub buy: BuySeries,
    pub rent: RentSeries,
    pub rent_to_buy: BuySeries,
    pub buy_and_rent: BuyAndRentSeries,
    pub comparison: NetWorthComparison,
    /// One entry per strategy, in [`Strategy::ALL`] order
    pub roi: Vec<RoiSummary>,
    pub breakdowns: Vec<CostBreakdown>,
}

impl ScenarioResults {
    /// ROI of `strategy`, if it was computed
    pub fn roi_for(&self, strategy: Strategy) -> Option<f64> {
        self.roi.iter().find(|r| r.strategy == strategy).map(|r| r.value)
    }
}

/// Run every projector for one parameter snapshot
///
/// Order is Buy, Rent, Rent-to-Buy, Buy-and-Rent. The buy-and-rent investor
/// lets the same property as the buy case, pays the starting rent personally
/// and earns the configured rental income. Fails only when the rent-to-buy
/// delay does not fall inside the bond period.
pub fn recompute(params: &ScenarioParameters) -> Result<ScenarioResults> {
    let monthly_expenses = params.monthly_expenses();

    let buy_data = buy(
        params.house_price,
        params.deposit,
        params.yearly_interest,
        params.period_months,
        params.yearly_growth,
        monthly_expenses,
        params.yearly_inflation,
    );
    let rent_data = rent(
        params.start_rent,
        params.yearly_rent_increase,
        params.yearly_savings_interest,
        &buy_data,
    );
    let rent_to_buy_data = rent_to_buy(
        params.rent_to_buy_delay,
        params.yearly_interest,
        params.yearly_growth,
        params.yearly_inflation,
        &rent_data,
        &buy_data,
    )?;
    let buy_and_rent_data = buy_and_rent(
        &buy_data,
        params.start_rent,
        params.rental_income,
        params.yearly_rent_increase,
        params.yearly_savings_interest,
        params.monthly_investment,
    );

    let roi = vec![
        RoiSummary::from_series(Strategy::Buy, &buy_data, &buy_data.nett),
        RoiSummary::from_series(Strategy::Rent, &rent_data, &rent_data.savings),
        RoiSummary::from_series(Strategy::RentToBuy, &rent_to_buy_data, &rent_to_buy_data.nett),
        RoiSummary::from_series(Strategy::BuyAndRent, &buy_and_rent_data, &buy_and_rent_data.nett),
    ];
    let breakdowns = vec![
        CostBreakdown::buy(&buy_data),
        CostBreakdown::rent(&rent_data),
        CostBreakdown::rent_to_buy(&rent_to_buy_data, &rent_data, params.rent_to_buy_delay as usize),
        CostBreakdown::buy_and_rent(&buy_and_rent_data, &buy_data),
    ];
    let comparison = NetWorthComparison::new(&buy_data, &rent_data, &buy_and_rent_data);

    info!(
        "recomputed {} months: {}",
        params.period_months,
        roi.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ")
    );

    Ok(ScenarioResults {
        params: *params,
        buy: buy_data,
        rent: rent_data,
        rent_to_buy: rent_to_buy_data,
        buy_and_rent: buy_and_rent_data,
        comparison,
        roi,
        breakdowns,
    })
}

/// Take one snapshot from `source`, recompute in full and hand the results to `sink`
///
/// Hosts call this from their change notification. Out-of-range values are
/// logged but still projected.
pub fn update<S, D>(source: &S, sink: &mut D) -> Result<ScenarioResults>
where
    S: ParameterSource + ?Sized,
    D: DisplaySink + ?Sized,
{
    let params = source.snapshot()?;
    for (range, value) in params.out_of_range() {
        warn!(
            "{} = {} is outside [{}, {}]",
            range.name, value, range.start, range.end
        );
    }
    let results = recompute(&params)?;
    sink.render(&results)?;
    Ok(results)
}

/// Rent-to-buy outcome for one candidate delay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayOutcome {
    pub delay_months: u32,
    pub deposit: f64,
    pub final_nett: f64,
    pub roi: f64,
}

/// Batch runner over variations of a base scenario
///
/// Each scenario is projected independently, so batches run in parallel.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_parameters: ScenarioParameters,
}

impl ScenarioRunner {
    /// Runner over variations of `base_parameters`
    pub fn new(base_parameters: ScenarioParameters) -> Self {
        Self { base_parameters }
    }

    /// Recompute the base scenario
    pub fn run(&self) -> Result<ScenarioResults> {
        recompute(&self.base_parameters)
    }

    /// Recompute each scenario; the first failure aborts the batch
    pub fn run_scenarios(&self, scenarios: &[ScenarioParameters]) -> Result<Vec<ScenarioResults>> {
        scenarios.par_iter().map(recompute).collect()
    }

    /// Rent-to-buy result of the base scenario at each delay, in input order
    pub fn sweep_delays(&self, delays: &[u32]) -> Result<Vec<DelayOutcome>> {
        delays
            .par_iter()
            .map(|&delay_months| {
                let params = ScenarioParameters {
                    rent_to_buy_delay: delay_months,
                    ..self.base_parameters
                };
                let results = recompute(&params)?;
                let data = &results.rent_to_buy;
                Ok(DelayOutcome {
                    delay_months,
                    deposit: data.deposit,
                    final_nett: data.nett.last().copied().unwrap_or(f64::NAN),
                    roi: results.roi_for(Strategy::RentToBuy).unwrap_or(f64::NAN),
                })
            })
            .collect()
    }

    /// Base scenario
    pub fn parameters(&self) -> &ScenarioParameters {
        &self.base_parameters
    }

    /// Mutable access to the base scenario
    pub fn parameters_mut(&mut self) -> &mut ScenarioParameters {
        &mut self.base_parameters
    }
}
