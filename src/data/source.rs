use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

use super::record::InventoryRecord;
use crate::constants::ingest::*;
use crate::error::{OptimizerError, Result};

/// Records read from one CSV file
#[derive(Debug, Clone, Default)]
pub struct LoadedInventory {
    /// Accepted rows, in file order
    pub records: Vec<InventoryRecord>,
    /// Rows dropped because a numeric field was missing or unparseable
    pub rejected_rows: usize,
}

/// Reject anything that is not a CSV by extension
pub fn check_extension(name: &str) -> Result<()> {
    let extension = Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(OptimizerError::UnsupportedFormat { extension })
    }
}

/// Load inventory records from a CSV file on disk
pub fn load_csv(path: &Path) -> Result<LoadedInventory> {
    check_extension(&path.to_string_lossy())?;
    let bytes = std::fs::read(path)?;
    parse_csv_bytes(bytes)
}

/// Parse inventory records from raw CSV bytes (file contents or a dropped file)
///
/// Every column is read as text and coerced here, so `date` keeps its
/// original spelling and numeric coercion follows one rule: a row whose
/// `orders`, `inventory_level` or `lead_time_days` value is missing or not a
/// finite number is rejected. Blank lines are skipped without counting, and
/// fields past the header width are dropped.
pub fn parse_csv_bytes(bytes: Vec<u8>) -> Result<LoadedInventory> {
    profiling::scope!("parse_csv");

    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(OptimizerError::EmptyFile);
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    let orders_text = required_column(&df, COL_ORDERS)?;
    let level_text = required_column(&df, COL_INVENTORY_LEVEL)?;
    let lead_time_text = text_column(&df, COL_LEAD_TIME_DAYS)?;
    let product_id = text_column(&df, COL_PRODUCT_ID)?;
    let product_name = text_column(&df, COL_PRODUCT_NAME)?;
    let date = text_column(&df, COL_DATE)?;
    let blank = blank_rows(&df)?;

    let text_at = |column: &Option<Vec<Option<String>>>, row: usize| -> String {
        column
            .as_ref()
            .and_then(|values| values.get(row).cloned().flatten())
            .unwrap_or_default()
    };

    let mut loaded = LoadedInventory::default();
    for row in 0..df.height() {
        if blank[row] {
            continue;
        }

        let orders = parse_number(orders_text[row].as_deref());
        let level = parse_number(level_text[row].as_deref());
        let lead_time = match &lead_time_text {
            Some(values) => parse_number(values[row].as_deref()),
            None => Some(0.0),
        };

        match (orders, level, lead_time) {
            (Some(orders), Some(inventory_level), Some(lead_time_days)) => {
                loaded.records.push(InventoryRecord {
                    product_id: text_at(&product_id, row),
                    product_name: text_at(&product_name, row),
                    date: text_at(&date, row),
                    inventory_level,
                    orders,
                    lead_time_days,
                });
            }
            _ => {
                // +2: one for the header, one for 1-based line numbers
                tracing::debug!(line = row + 2, "rejected row with non-numeric field");
                loaded.rejected_rows += 1;
            }
        }
    }

    if loaded.rejected_rows > 0 {
        tracing::warn!(
            rejected = loaded.rejected_rows,
            accepted = loaded.records.len(),
            "some CSV rows had missing or non-numeric values"
        );
    }

    Ok(loaded)
}

/// Find a column by header name, ignoring surrounding whitespace and a BOM
fn find_column<'a>(df: &'a DataFrame, name: &str) -> Option<&'a Column> {
    df.get_columns()
        .iter()
        .find(|c| c.name().as_str().trim_start_matches('\u{feff}').trim() == name)
}

fn text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    let Some(column) = find_column(df, name) else {
        return Ok(None);
    };

    let series = column.as_materialized_series().cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    Ok(Some(values))
}

/// Rows where every field is missing or whitespace
fn blank_rows(df: &DataFrame) -> Result<Vec<bool>> {
    let mut blank = vec![true; df.height()];
    for column in df.get_columns() {
        let series = column.as_materialized_series().cast(&DataType::String)?;
        for (row, value) in series.str()?.into_iter().enumerate() {
            if value.is_some_and(|v| !v.trim().is_empty()) {
                blank[row] = false;
            }
        }
    }
    Ok(blank)
}

fn required_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    text_column(df, name)?.ok_or_else(|| OptimizerError::ColumnNotFound {
        column: name.to_string(),
    })
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const SAMPLE: &str = "\
product_id,product_name,date,inventory_level,orders,lead_time_days
P001,Widget,2024-01-01,50,10,5
P001,Widget,2024-01-02,80,20,5
P001,Widget,2024-01-03,65,30,5
";

    #[test]
    fn test_csv_loading_from_disk() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        file.flush().unwrap();

        let loaded = load_csv(file.path()).unwrap();

        assert_eq!(loaded.rejected_rows, 0);
        assert_eq!(loaded.records.len(), 3);
        assert_eq!(loaded.records[0].product_id, "P001");
        assert_eq!(loaded.records[0].product_name, "Widget");
        assert_eq!(loaded.records[0].date, "2024-01-01");
        assert_eq!(loaded.records[0].lead_time_days, 5.0);

        let levels: Vec<f64> = loaded.records.iter().map(|r| r.inventory_level).collect();
        assert_eq!(levels, vec![50.0, 80.0, 65.0]);
        let orders: Vec<f64> = loaded.records.iter().map(|r| r.orders).collect();
        assert_eq!(orders, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let csv = "date,inventory_level,orders\n2024-03-09,1,1\n2024-01-01,2,2\n2024-02-15,3,3\n";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        let dates: Vec<&str> = loaded.records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-09", "2024-01-01", "2024-02-15"]);
    }

    #[test]
    fn test_optional_columns_default() {
        let csv = "orders,inventory_level\n4,40\n6,60\n";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1].product_id, "");
        assert_eq!(loaded.records[1].date, "");
        assert_eq!(loaded.records[1].lead_time_days, 0.0);
        assert_eq!(loaded.records[1].orders, 6.0);
    }

    #[test]
    fn test_malformed_numbers_reject_row() {
        let csv = "\
date,inventory_level,orders
2024-01-01,50,10
2024-01-02,eighty,20
2024-01-03,65,
2024-01-04,70,NaN
2024-01-05, 75 , 12.5
";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(loaded.rejected_rows, 3);
        let dates: Vec<&str> = loaded.records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-05"]);
        assert_eq!(loaded.records[1].inventory_level, 75.0);
        assert_eq!(loaded.records[1].orders, 12.5);
    }

    #[test]
    fn test_blank_lines_are_not_rejections() {
        let csv = "orders,inventory_level\n10,50\n\n20,60\n\n";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.rejected_rows, 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let csv = "orders,inventory_level\r\n10,50\r\n20,60\r\n";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(loaded.rejected_rows, 0);
        let levels: Vec<f64> = loaded.records.iter().map(|r| r.inventory_level).collect();
        assert_eq!(levels, vec![50.0, 60.0]);
        assert_eq!(loaded.records[1].orders, 20.0);
    }

    #[test]
    fn test_ragged_rows_do_not_fail_the_file() {
        let csv = "orders,inventory_level\n10,50,9\n20\n30,70\n";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        let orders: Vec<f64> = loaded.records.iter().map(|r| r.orders).collect();
        assert_eq!(orders, vec![10.0, 30.0]);
        assert_eq!(loaded.records[0].inventory_level, 50.0);
        // the short row has no inventory level
        assert_eq!(loaded.rejected_rows, 1);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "date,inventory_level\n2024-01-01,50\n";
        let err = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap_err();
        assert!(matches!(
            err,
            OptimizerError::ColumnNotFound { ref column } if column == "orders"
        ));
    }

    #[test]
    fn test_header_only_gives_no_records() {
        let csv = "date,inventory_level,orders\n";
        let loaded = parse_csv_bytes(csv.as_bytes().to_vec()).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.rejected_rows, 0);
    }

    #[test]
    fn test_empty_file() {
        let err = parse_csv_bytes(b"  \n".to_vec()).unwrap_err();
        assert!(matches!(err, OptimizerError::EmptyFile));
    }

    #[test]
    fn test_extension_check() {
        assert!(check_extension("inventory.csv").is_ok());
        assert!(check_extension("INVENTORY.CSV").is_ok());
        let err = check_extension("inventory.parquet").unwrap_err();
        assert!(matches!(
            err,
            OptimizerError::UnsupportedFormat { ref extension } if extension == "parquet"
        ));
        assert!(check_extension("inventory").is_err());
    }
}
