use crate::app::InventoryOptimizer;
use crate::data::date_span;
use eframe::egui;

/// Render the upload control, recent files and view buttons
pub fn render_toolbar(app: &mut InventoryOptimizer, ui: &mut egui::Ui) {
    ui.heading("Inventory Optimizer");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        // File operations
        if ui.button("📂 Open CSV").on_hover_text("Open an inventory CSV file").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV Files", crate::constants::ingest::EXTENSIONS)
                .pick_file()
            {
                if let Err(e) = app.load_file(path) {
                    app.report(&e);
                }
            }
        }

        // Recent files menu
        if !app.state.recent_files.is_empty() {
            egui::ComboBox::from_id_salt("recent_files")
                .selected_text("📋 Recent")
                .show_ui(ui, |ui| {
                    // Need to clone to avoid borrow checker issues with load_file
                    for path in app.state.recent_files.clone() {
                        let Some(name) = path.file_name() else { continue };
                        if ui
                            .button(name.to_string_lossy())
                            .on_hover_text(path.display().to_string())
                            .clicked()
                        {
                            if let Err(e) = app.load_file(path.clone()) {
                                app.report(&e);
                            }
                        }
                    }
                });
        }
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label("Drag and drop a CSV file onto the window");
            ui.small("Supported format: CSV");
        });
    });

    if let Some(file) = &app.state.current_file {
        ui.label(format!("📄 {}", file));
    }

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.toggle_value(&mut app.state.view.show_grid, "⊞").on_hover_text("Grid (G)");
        ui.toggle_value(&mut app.state.view.show_legend, "🏷").on_hover_text("Legend (L)");
        ui.toggle_value(&mut app.state.view.show_data_table, "📋")
            .on_hover_text("Data Table (D)");
        if ui.button("🔄").on_hover_text("Reset chart view (R)").clicked() {
            app.reset_view();
        }
        let theme_icon = if app.state.view.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
            app.state.view.dark_mode = !app.state.view.dark_mode;
        }
        if ui.button("⚙").on_hover_text("Save view preferences").clicked() {
            app.save_config();
        }
        if ui.button("📥").on_hover_text("Load view preferences").clicked() {
            app.load_config();
        }
        if ui.button("❓").on_hover_text("Help (F1)").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }
    });
}

/// Load the first file dropped onto the window this frame
pub fn handle_dropped_files(app: &mut InventoryOptimizer, ctx: &egui::Context) {
    let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
    let Some(file) = dropped else { return };

    let result = match (file.path, file.bytes) {
        (Some(path), _) => app.load_file(path),
        (None, Some(bytes)) => app.load_bytes(&file.name, bytes.to_vec()),
        (None, None) => return,
    };
    if let Err(e) = result {
        app.report(&e);
    }
}

/// Highlight the window while a file is dragged over it
pub fn render_drop_overlay(ctx: &egui::Context) {
    if ctx.input(|i| i.raw.hovered_files.is_empty()) {
        return;
    }

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("file_drop_target"),
    ));
    let screen_rect = ctx.content_rect();
    painter.rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(160));
    painter.text(
        screen_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Drop CSV to load",
        egui::FontId::proportional(24.0),
        egui::Color32::WHITE,
    );
}

/// Error or warning banner with a dismiss button
pub fn render_banner(app: &mut InventoryOptimizer, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if let Some((title, message)) = &app.state.ui.error_message {
            ui.colored_label(ui.visuals().error_fg_color, format!("{}: {}", title, message));
        } else if let Some(warning) = &app.state.ui.warning_message {
            ui.colored_label(ui.visuals().warn_fg_color, warning);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖").on_hover_text("Dismiss (Esc)").clicked() {
                app.state.ui.dismiss();
            }
        });
    });
}

pub fn render_status_bar(app: &InventoryOptimizer, ui: &mut egui::Ui) {
    let analysis = &app.state.analysis;
    ui.horizontal(|ui| {
        if let Some(file) = &app.state.current_file {
            ui.label(format!("📁 {}", file));
            ui.separator();
        }
        ui.label(format!("Records: {}", analysis.records().len()));
        if app.state.rejected_rows > 0 {
            ui.separator();
            ui.label(format!("Skipped: {}", app.state.rejected_rows));
        }
        if let Some((first, last)) = date_span(analysis.records()) {
            ui.separator();
            ui.label(format!("{} → {}", first, last));
        }
        ui.separator();
        match analysis.average_daily_sales() {
            Some(avg) => ui.label(format!("Avg daily sales: {:.2}", avg)),
            None => ui.label("Avg daily sales: no data"),
        };
    });
}
