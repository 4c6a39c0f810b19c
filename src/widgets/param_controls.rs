//! Reorder parameter inputs widget

use crate::state::Parameters;
use egui::Ui;

/// Lead time and safety stock inputs.
///
/// Edits a copy of the parameters; `show` returns the new value only when the
/// user changed something, so the caller can recompute right away.
pub struct ParamControls {
    params: Parameters,
}

impl ParamControls {
    /// Create a new parameter controls widget
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    /// Show the parameter controls
    pub fn show(mut self, ui: &mut Ui) -> Option<Parameters> {
        let mut changed = false;

        egui::Grid::new("param_controls")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Lead Time (days)");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut self.params.lead_time_days)
                            .speed(0.5)
                            .suffix(" d"),
                    )
                    .on_hover_text("Days between placing a reorder and receiving stock")
                    .changed();
                ui.end_row();

                ui.label("Safety Stock (%)");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut self.params.safety_stock_percent)
                            .speed(1.0)
                            .suffix(" %"),
                    )
                    .on_hover_text("Extra stock held above expected demand")
                    .changed();
                ui.end_row();
            });

        if ui
            .small_button("↺ Defaults")
            .on_hover_text("Lead time 5 days, safety stock 20%")
            .clicked()
            && self.params != Parameters::default()
        {
            self.params = Parameters::default();
            changed = true;
        }

        changed.then_some(self.params)
    }
}
