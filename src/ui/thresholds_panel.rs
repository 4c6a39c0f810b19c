use crate::app::InventoryOptimizer;
use crate::constants::colors;
use crate::widgets::ThresholdCard;

/// Render the calculated low/medium/high thresholds
pub fn render_thresholds_panel(app: &mut InventoryOptimizer, ui: &mut eframe::egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Calculated Thresholds");
        ui.with_layout(
            eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
            |ui| {
                if let Some(text) = app.thresholds_summary() {
                    if ui.small_button("📋").on_hover_text("Copy thresholds").clicked() {
                        ui.ctx().copy_text(text);
                    }
                }
            },
        );
    });
    ui.add_space(4.0);

    let thresholds = app.state.analysis.display_thresholds();
    let card_width = (ui.available_width() / 3.0 - 16.0).max(60.0);

    ui.horizontal(|ui| {
        ThresholdCard::new("Low", thresholds.map(|t| t.low), colors::LOW)
            .width(card_width)
            .show(ui);
        ThresholdCard::new("Medium", thresholds.map(|t| t.medium), colors::MEDIUM)
            .width(card_width)
            .show(ui);
        ThresholdCard::new("High", thresholds.map(|t| t.high), colors::HIGH)
            .width(card_width)
            .show(ui);
    });

    ui.add_space(4.0);
    match app.state.analysis.average_daily_sales() {
        Some(avg) => ui.label(format!("Average daily sales: {:.2}", avg)),
        None => ui.weak("No data yet: load a CSV to calculate thresholds"),
    };
}
