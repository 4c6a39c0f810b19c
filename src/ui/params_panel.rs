use crate::app::InventoryOptimizer;
use crate::widgets::ParamControls;

/// Render the lead time / safety stock inputs; any edit recomputes at once
pub fn render_params_panel(app: &mut InventoryOptimizer, ui: &mut eframe::egui::Ui) {
    ui.heading("Parameters");
    ui.add_space(4.0);

    if let Some(params) = ParamControls::new(app.state.analysis.params()).show(ui) {
        app.set_params(params);
    }
}
