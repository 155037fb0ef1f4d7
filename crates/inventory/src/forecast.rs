//! Day-by-day stock projection for display.
//!
//! Model: constant consumption from the starting stock, no replenishment.
//! The curve can go negative. It is descriptive only and never used to decide
//! whether a location reorders; that is [`crate::reorder`]'s job.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use restock_core::ValueObject;

use crate::parameters::{LocationRecord, StockParameters};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// 1-based day index.
    pub day: u32,
    pub projected_stock: i64,
    /// Units consumed on this day.
    pub consumption: i64,
    /// Constant reference line drawn at the safety stock level.
    pub safety_stock_line: i64,
}

impl ValueObject for ForecastPoint {}

/// Project stock for days `1..=horizon_days`.
///
/// `projected_stock(day) = starting_stock - daily_usage * (day - 1)`.
pub fn project(
    starting_stock: i64,
    daily_usage: i64,
    safety_stock: i64,
    horizon_days: u32,
) -> Vec<ForecastPoint> {
    (1..=horizon_days)
        .map(|day| ForecastPoint {
            day,
            projected_stock: starting_stock
                .saturating_sub(daily_usage.saturating_mul(i64::from(day - 1))),
            consumption: daily_usage,
            safety_stock_line: safety_stock,
        })
        .collect()
}

/// Project an "average location" starting from the mean current stock.
///
/// The mean is rounded down. This describes the fleet as a whole and says
/// nothing about any individual location. Returns an empty series when there
/// are no records.
pub fn project_average(
    records: &[LocationRecord],
    parameters: &StockParameters,
    horizon_days: u32,
) -> Vec<ForecastPoint> {
    if records.is_empty() {
        return Vec::new();
    }
    let total: i128 = records.iter().map(|r| i128::from(r.current_stock)).sum();
    let mean = total.div_euclid(records.len() as i128);
    let mean = i64::try_from(mean).unwrap_or(if mean < 0 { i64::MIN } else { i64::MAX });

    project(mean, parameters.daily_usage, parameters.safety_stock, horizon_days)
}

/// Date on which an order placed on `ordered_on` is expected to arrive.
///
/// `None` for a negative lead time or a date past chrono's range.
pub fn next_arrival_date(ordered_on: NaiveDate, lead_time_days: i64) -> Option<NaiveDate> {
    let days = u64::try_from(lead_time_days).ok()?;
    ordered_on.checked_add_days(Days::new(days))
}
