use serde::Serialize;

use restock_core::{LocationName, ValueObject};

use crate::parameters::{LocationRecord, StockParameters};

/// Stock level below which a location must reorder.
///
/// `safety_stock + daily_usage * lead_time_days`. Inputs are not validated
/// here; negative values flow through the arithmetic. Overflow saturates.
pub fn compute_reorder_point(daily_usage: i64, safety_stock: i64, lead_time_days: i64) -> i64 {
    safety_stock.saturating_add(daily_usage.saturating_mul(lead_time_days))
}

/// Units missing to get back to the reorder point, never below zero.
pub fn compute_shortfall(current_stock: i64, reorder_point: i64) -> i64 {
    reorder_point.saturating_sub(current_stock).max(0)
}

/// Result of evaluating one location against a set of parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderAssessment {
    name: LocationName,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    current_stock: i64,
    reorder_point: i64,
    shortfall: i64,
    needs_replenishment: bool,
}

impl ValueObject for ReorderAssessment {}

impl ReorderAssessment {
    pub fn name(&self) -> &LocationName {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn reorder_point(&self) -> i64 {
        self.reorder_point
    }

    pub fn shortfall(&self) -> i64 {
        self.shortfall
    }

    pub fn needs_replenishment(&self) -> bool {
        self.needs_replenishment
    }
}

/// Evaluate a single record.
pub fn assess(record: &LocationRecord, parameters: &StockParameters) -> ReorderAssessment {
    let reorder_point = compute_reorder_point(
        parameters.daily_usage,
        parameters.safety_stock,
        parameters.lead_time_days,
    );
    let shortfall = compute_shortfall(record.current_stock, reorder_point);

    ReorderAssessment {
        name: record.name.clone(),
        address: record.address.clone(),
        current_stock: record.current_stock,
        reorder_point,
        shortfall,
        needs_replenishment: shortfall > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(name: &str, stock: i64) -> LocationRecord {
        LocationRecord::new(LocationName::new(name).unwrap(), stock)
    }

    #[test]
    fn reorder_point_is_safety_plus_lead_time_consumption() {
        assert_eq!(compute_reorder_point(50, 30, 5), 280);
        assert_eq!(compute_reorder_point(0, 30, 5), 30);
        assert_eq!(compute_reorder_point(50, 0, 0), 0);
    }

    #[test]
    fn negative_inputs_propagate_arithmetically() {
        assert_eq!(compute_reorder_point(-10, 5, 3), -25);
        assert_eq!(compute_shortfall(-5, 10), 15);
    }

    #[test]
    fn stock_equal_to_reorder_point_is_sufficient() {
        let a = assess(&record("A", 280), &StockParameters::new(50, 30, 5).unwrap());
        assert_eq!(a.shortfall(), 0);
        assert!(!a.needs_replenishment());
    }

    #[test]
    fn assessment_carries_source_fields() {
        let r = record("Osaka", 150).with_address("1-1 Umeda");
        let a = assess(&r, &StockParameters::new(50, 30, 5).unwrap());
        assert_eq!(a.name().as_str(), "Osaka");
        assert_eq!(a.address(), Some("1-1 Umeda"));
        assert_eq!(a.current_stock(), 150);
        assert_eq!(a.reorder_point(), 280);
        assert_eq!(a.shortfall(), 130);
        assert!(a.needs_replenishment());
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(compute_reorder_point(i64::MAX, 1, 2), i64::MAX);
        assert_eq!(compute_shortfall(i64::MIN, i64::MAX), i64::MAX);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the reorder point is exact for any non-negative parameters.
        #[test]
        fn reorder_point_is_exact(
            daily_usage in 0i64..1_000_000,
            safety_stock in 0i64..1_000_000,
            lead_time_days in 0i64..3_650,
        ) {
            prop_assert_eq!(
                compute_reorder_point(daily_usage, safety_stock, lead_time_days),
                safety_stock + daily_usage * lead_time_days
            );
        }

        /// Property: replenishment is needed exactly when the shortfall is positive.
        #[test]
        fn needs_replenishment_iff_positive_shortfall(
            stock in 0i64..10_000_000,
            daily_usage in 0i64..10_000,
            safety_stock in 0i64..10_000,
            lead_time_days in 0i64..365,
        ) {
            let params = StockParameters::new(daily_usage, safety_stock, lead_time_days).unwrap();
            let a = assess(&record("P", stock), &params);

            prop_assert_eq!(a.shortfall(), (a.reorder_point() - stock).max(0));
            prop_assert!(a.shortfall() >= 0);
            prop_assert_eq!(a.needs_replenishment(), a.shortfall() > 0);
        }
    }
}
