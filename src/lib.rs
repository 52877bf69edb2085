//! Homework - Month-by-month projection engine for housing strategies
//!
//! This library provides:
//! - Transfer duty, bond registration and amortized repayment calculators
//! - Monthly projections for buying, renting, renting then buying, and
//!   buying to let while renting elsewhere
//! - The affordable-deposit search used when a renter decides to buy
//! - A scenario orchestrator with ROI summaries, cost breakdowns and
//!   display sinks

pub mod error;
pub mod fees;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, Result};
pub use projection::{BuyAndRentSeries, BuySeries, MonthlySeries, RentSeries};
pub use scenario::{
    recompute, update, DisplaySink, ParameterSource, ScenarioParameters, ScenarioResults,
    ScenarioRunner,
};
