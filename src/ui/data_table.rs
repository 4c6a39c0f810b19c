use crate::app::InventoryOptimizer;
use crate::constants::layout::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::data::InventoryRecord;
use egui_extras::{Column, TableBuilder};

/// Indices of records whose text fields contain `filter` (case-insensitive)
pub fn filter_rows(records: &[InventoryRecord], filter: &str) -> Vec<usize> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return (0..records.len()).collect();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            [&r.product_id, &r.product_name, &r.date]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Render the loaded records with virtual scrolling
pub fn render_data_table_panel(app: &mut InventoryOptimizer, ui: &mut eframe::egui::Ui) {
    profiling::scope!("render_data_table");

    // Filter/Search controls
    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            eframe::egui::TextEdit::singleline(&mut app.state.ui.row_filter)
                .hint_text("Filter by product or date...")
                .desired_width(180.0),
        );
        if ui.small_button("✖").on_hover_text("Clear filter").clicked() {
            app.state.ui.row_filter.clear();
        }
    });

    let records = app.state.analysis.records();
    let rows = filter_rows(records, &app.state.ui.row_filter);

    if app.state.ui.has_filter() {
        ui.label(format!("Showing {} of {} rows", rows.len(), records.len()));
    }
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(36.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(100.0))
        .columns(Column::auto().at_least(60.0), 3)
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            for title in ["#", "Date", "Product", "Inventory", "Orders", "Lead Time"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                let idx = rows[row.index()];
                let record = &records[idx];
                row.col(|ui| {
                    ui.label((idx + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(&record.date);
                });
                row.col(|ui| {
                    ui.label(&record.product_name)
                        .on_hover_text(&record.product_id);
                });
                row.col(|ui| {
                    ui.label(format!("{}", record.inventory_level));
                });
                row.col(|ui| {
                    ui.label(format!("{}", record.orders));
                });
                row.col(|ui| {
                    ui.label(format!("{}", record.lead_time_days));
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::record;

    #[test]
    fn test_filter_rows() {
        let mut gadget = record("2024-01-02", 1.0, 1.0);
        gadget.product_name = "Gadget".to_string();
        gadget.product_id = "P002".to_string();
        let records = vec![record("2024-01-01", 1.0, 1.0), gadget, record("2024-02-01", 1.0, 1.0)];

        assert_eq!(filter_rows(&records, ""), vec![0, 1, 2]);
        assert_eq!(filter_rows(&records, "  "), vec![0, 1, 2]);
        assert_eq!(filter_rows(&records, "gadget"), vec![1]);
        assert_eq!(filter_rows(&records, "p002"), vec![1]);
        assert_eq!(filter_rows(&records, "2024-01"), vec![0, 1]);
        assert!(filter_rows(&records, "sprocket").is_empty());
    }
}
