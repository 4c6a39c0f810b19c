//! Inventory analysis state
//!
//! Records, parameters and the derived calculation travel together in one
//! value. Updates return a new value with the calculation redone, so the
//! derived numbers can never drift from the inputs that produced them.

use std::sync::Arc;

use crate::constants::params::{DEFAULT_LEAD_TIME_DAYS, DEFAULT_SAFETY_STOCK_PERCENT};
use crate::data::{InventoryRecord, ThresholdCalculation, Thresholds, compute_thresholds};

/// User-settable reorder parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Days between placing a reorder and receiving stock
    pub lead_time_days: f64,
    /// Extra stock held above expected demand, in percent
    pub safety_stock_percent: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            safety_stock_percent: DEFAULT_SAFETY_STOCK_PERCENT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    records: Arc<[InventoryRecord]>,
    params: Parameters,
    calculation: Option<ThresholdCalculation>,
}

impl Default for Analysis {
    fn default() -> Self {
        Self::derive(Arc::from(Vec::new()), Parameters::default())
    }
}

impl Analysis {
    fn derive(records: Arc<[InventoryRecord]>, params: Parameters) -> Self {
        let calculation = compute_thresholds(
            &records,
            params.lead_time_days,
            params.safety_stock_percent,
        );
        tracing::debug!(
            records = records.len(),
            lead_time_days = params.lead_time_days,
            safety_stock_percent = params.safety_stock_percent,
            average_daily_sales = ?calculation.map(|c| c.average_daily_sales),
            "thresholds recomputed"
        );
        Self {
            records,
            params,
            calculation,
        }
    }

    /// Replace the record set wholesale, keeping the current parameters
    pub fn with_records(&self, records: Vec<InventoryRecord>) -> Self {
        Self::derive(Arc::from(records), self.params)
    }

    /// Apply new parameters to the already-loaded records
    pub fn with_params(&self, params: Parameters) -> Self {
        Self::derive(Arc::clone(&self.records), params)
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn params(&self) -> Parameters {
        self.params
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn average_daily_sales(&self) -> Option<f64> {
        self.calculation.map(|c| c.average_daily_sales)
    }

    /// Thresholds as displayed and charted (rounded)
    pub fn display_thresholds(&self) -> Option<Thresholds> {
        self.calculation.map(|c| c.thresholds.rounded())
    }

    /// Inventory levels in upload order
    pub fn inventory_levels(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.inventory_level).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::record;

    fn sample() -> Vec<InventoryRecord> {
        vec![
            record("2024-01-01", 50.0, 10.0),
            record("2024-01-02", 80.0, 20.0),
            record("2024-01-03", 65.0, 30.0),
        ]
    }

    #[test]
    fn test_default_has_no_data() {
        let analysis = Analysis::default();
        assert!(!analysis.has_records());
        assert_eq!(analysis.params(), Parameters::default());
        assert_eq!(analysis.params().lead_time_days, 5.0);
        assert_eq!(analysis.params().safety_stock_percent, 20.0);
        assert!(analysis.calculation.is_none());
        assert!(analysis.average_daily_sales().is_none());
        assert!(analysis.display_thresholds().is_none());
    }

    #[test]
    fn test_loading_records_recomputes() {
        let analysis = Analysis::default().with_records(sample());
        assert_eq!(analysis.average_daily_sales(), Some(20.0));
        assert_eq!(
            analysis.display_thresholds(),
            Some(Thresholds { low: 100.0, medium: 120.0, high: 144.0 })
        );
        assert_eq!(analysis.inventory_levels(), vec![50.0, 80.0, 65.0]);
    }

    #[test]
    fn test_param_edit_reuses_records() {
        let loaded = Analysis::default().with_records(sample());
        let edited = loaded.with_params(Parameters {
            lead_time_days: 10.0,
            safety_stock_percent: 0.0,
        });

        assert_eq!(edited.records(), loaded.records());
        let t = edited.display_thresholds().unwrap();
        assert_eq!(t.low, 200.0);
        assert_eq!(t.medium, 200.0);
        assert_eq!(t.high, 240.0);

        // the previous value is untouched
        assert_eq!(loaded.display_thresholds().unwrap().low, 100.0);
    }

    #[test]
    fn test_new_upload_replaces_records() {
        let first = Analysis::default().with_records(sample());
        let second = first.with_records(vec![record("2024-02-01", 5.0, 4.0)]);
        assert_eq!(second.records().len(), 1);
        assert_eq!(second.average_daily_sales(), Some(4.0));

        let emptied = second.with_records(Vec::new());
        assert!(emptied.display_thresholds().is_none());
    }
}
