use chrono::NaiveDate;

use crate::constants::ingest::DATE_FORMATS;

/// One row of the uploaded inventory CSV
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub product_id: String,
    pub product_name: String,
    /// Display text, kept exactly as it appeared in the file
    pub date: String,
    pub inventory_level: f64,
    pub orders: f64,
    pub lead_time_days: f64,
}

impl InventoryRecord {
    /// Parse the date text as a calendar date, if it is in a known format
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let trimmed = self.date.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    }
}

/// First and last parseable dates of a record set, in upload order
pub fn date_span(records: &[InventoryRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let first = records.iter().find_map(InventoryRecord::calendar_date)?;
    let last = records.iter().rev().find_map(InventoryRecord::calendar_date)?;
    Some((first, last))
}

#[cfg(test)]
pub(crate) fn record(date: &str, inventory_level: f64, orders: f64) -> InventoryRecord {
    InventoryRecord {
        product_id: "P001".to_string(),
        product_name: "Widget".to_string(),
        date: date.to_string(),
        inventory_level,
        orders,
        lead_time_days: 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_formats() {
        let iso = record("2024-03-01", 0.0, 0.0);
        assert_eq!(iso.calendar_date(), NaiveDate::from_ymd_opt(2024, 3, 1));

        let us = record("03/15/2024", 0.0, 0.0);
        assert_eq!(us.calendar_date(), NaiveDate::from_ymd_opt(2024, 3, 15));

        let free_text = record("week 12", 0.0, 0.0);
        assert_eq!(free_text.calendar_date(), None);
    }

    #[test]
    fn test_date_span_skips_unparseable_ends() {
        let records = vec![
            record("start", 1.0, 1.0),
            record("2024-01-02", 1.0, 1.0),
            record("2024-01-09", 1.0, 1.0),
            record("", 1.0, 1.0),
        ];
        let (first, last) = date_span(&records).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());

        assert!(date_span(&[]).is_none());
    }
}
