//! Reorder threshold calculation
//!
//! Pure arithmetic over the loaded records and the two user parameters.
//! Nothing here touches application state; callers store the result.

use super::record::InventoryRecord;
use crate::constants::params::HIGH_THRESHOLD_MULTIPLIER;

/// Reorder trigger levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Thresholds {
    /// Values as shown to the user: nearest integer, halves rounded up
    pub fn rounded(&self) -> Self {
        Self {
            low: round_half_up(self.low),
            medium: round_half_up(self.medium),
            high: round_half_up(self.high),
        }
    }

    /// Largest of the three levels
    pub fn max(&self) -> f64 {
        self.low.max(self.medium).max(self.high)
    }
}

/// Result of one threshold calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCalculation {
    pub average_daily_sales: f64,
    pub thresholds: Thresholds,
}

/// Compute average daily sales and the low/medium/high thresholds.
///
/// Returns `None` when there are no records, or when the sums overflow to a
/// non-finite value; the caller shows "no data" instead of a number.
/// Every real `lead_time_days` and `safety_stock_percent` is accepted.
pub fn compute_thresholds(
    records: &[InventoryRecord],
    lead_time_days: f64,
    safety_stock_percent: f64,
) -> Option<ThresholdCalculation> {
    if records.is_empty() {
        return None;
    }

    let total_orders: f64 = records.iter().map(|r| r.orders).sum();
    let average_daily_sales = total_orders / records.len() as f64;

    let low = average_daily_sales * lead_time_days;
    let medium = low * (1.0 + safety_stock_percent / 100.0);
    let high = medium * HIGH_THRESHOLD_MULTIPLIER;

    if ![average_daily_sales, low, medium, high]
        .iter()
        .all(|v| v.is_finite())
    {
        return None;
    }

    Some(ThresholdCalculation {
        average_daily_sales,
        thresholds: Thresholds { low, medium, high },
    })
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
