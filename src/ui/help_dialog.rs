use crate::app::InventoryOptimizer;

pub fn render_help_dialog(app: &mut InventoryOptimizer, ctx: &eframe::egui::Context) {
    if app.state.view.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("View");
                ui.label("R - Reset chart view");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("D - Toggle data table");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help, dismiss messages");

                ui.separator();
                ui.heading("Chart");
                ui.label("Scroll - Zoom in/out");
                ui.label("Shift + Scroll - Zoom X-axis only");
                ui.label("Ctrl + Scroll - Zoom Y-axis only");
                ui.label("Drag - Pan view");
                ui.label("Double-click - Reset view");

                ui.separator();
                ui.heading("Data");
                ui.label("CSV with a header row; 'orders' and 'inventory_level' are required");
                ui.label("Rows with non-numeric values are skipped");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
