use eframe::egui;
use std::path::{Path, PathBuf};

use crate::constants::config::VIEW_CONFIG_FILE;
use crate::data::{self, LoadedInventory};
use crate::error::Result;
use crate::state::{self, Parameters, ViewConfig};
use crate::ui;

#[derive(Default)]
pub struct InventoryOptimizer {
    pub state: state::AppState,
}

impl InventoryOptimizer {
    /// Load a CSV from disk, replacing the current records.
    /// On failure the previous records stay loaded.
    pub fn load_file(&mut self, path: PathBuf) -> Result<()> {
        let loaded = data::source::load_csv(&path)?;
        let name = display_name(&path);
        self.apply_loaded(name, loaded);
        self.state.remember_file(path);
        Ok(())
    }

    /// Load a CSV whose contents arrived without a path (e.g. a dropped file on web)
    pub fn load_bytes(&mut self, name: &str, bytes: Vec<u8>) -> Result<()> {
        data::source::check_extension(name)?;
        let loaded = data::source::parse_csv_bytes(bytes)?;
        self.apply_loaded(name.to_string(), loaded);
        Ok(())
    }

    fn apply_loaded(&mut self, name: String, loaded: LoadedInventory) {
        tracing::info!(
            file = %name,
            records = loaded.records.len(),
            rejected = loaded.rejected_rows,
            "inventory loaded"
        );
        self.state.analysis = self.state.analysis.with_records(loaded.records);
        self.state.rejected_rows = loaded.rejected_rows;
        self.state.current_file = Some(name);
        self.state.ui.on_data_loaded(loaded.rejected_rows);
        self.state.view.reset_bounds = true;
    }

    /// Recompute thresholds for new parameters against the loaded records
    pub fn set_params(&mut self, params: Parameters) {
        tracing::debug!(?params, "parameters changed");
        self.state.analysis = self.state.analysis.with_params(params);
        self.state.view.reset_bounds = true;
    }

    pub fn reset_view(&mut self) {
        self.state.view.reset_bounds = true;
    }

    /// Text copied to the clipboard from the thresholds panel
    pub fn thresholds_summary(&self) -> Option<String> {
        let analysis = &self.state.analysis;
        let thresholds = analysis.display_thresholds()?;
        let params = analysis.params();
        Some(format!(
            "Lead time: {} days\nSafety stock: {}%\nAverage daily sales: {:.2}\nLow: {:.0}\nMedium: {:.0}\nHigh: {:.0}",
            params.lead_time_days,
            params.safety_stock_percent,
            analysis.average_daily_sales().unwrap_or_default(),
            thresholds.low,
            thresholds.medium,
            thresholds.high,
        ))
    }

    pub fn write_view_config(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.state.view.to_config())?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "view config saved");
        Ok(())
    }

    pub fn read_view_config(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)?;
        let config: ViewConfig = serde_json::from_str(&contents)?;
        self.state.view.apply_config(&config);
        tracing::info!(path = %path.display(), "view config loaded");
        Ok(())
    }

    pub fn save_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(VIEW_CONFIG_FILE)
            .save_file()
        {
            if let Err(e) = self.write_view_config(&path) {
                self.report(&e);
            }
        }
    }

    pub fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            if let Err(e) = self.read_view_config(&path) {
                self.report(&e);
            }
        }
    }

    /// Log an error and show it in the banner
    pub fn report(&mut self, error: &crate::error::OptimizerError) {
        tracing::warn!(error = %error, "operation failed");
        self.state.ui.set_error(error.title(), error.user_message());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing in a text field must not toggle views
        let typing = ctx.wants_keyboard_input();
        ctx.input(|i| {
            if typing {
                return;
            }
            let view = &mut self.state.view;
            if i.key_pressed(egui::Key::R) {
                view.reset_bounds = true;
            }
            if i.key_pressed(egui::Key::G) {
                view.show_grid = !view.show_grid;
            }
            if i.key_pressed(egui::Key::L) {
                view.show_legend = !view.show_legend;
            }
            if i.key_pressed(egui::Key::T) {
                view.dark_mode = !view.dark_mode;
            }
            if i.key_pressed(egui::Key::D) {
                view.show_data_table = !view.show_data_table;
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                view.show_help = !view.show_help;
            }
        });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.view.show_help = false;
            self.state.ui.dismiss();
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for InventoryOptimizer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_shortcuts(ctx);
        ui::handle_dropped_files(self, ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(self, ui);
        });

        if self.state.ui.error_message.is_some() || self.state.ui.warning_message.is_some() {
            egui::TopBottomPanel::top("banner").show(ctx, |ui| {
                ui::render_banner(self, ui);
            });
        }

        egui::SidePanel::left("controls_panel")
            .resizable(true)
            .default_width(crate::constants::layout::CONTROLS_PANEL_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui::render_toolbar(self, ui);
                    ui.separator();
                    ui::render_params_panel(self, ui);
                    ui.separator();
                    ui::render_thresholds_panel(self, ui);
                });
            });

        if self.state.view.show_data_table && self.state.has_data() {
            egui::SidePanel::right("data_panel")
                .resizable(true)
                .default_width(crate::constants::layout::DATA_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui::render_data_table_panel(self, ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.has_data() {
                ui::render_chart(self, ui);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.heading("No data loaded");
                    ui.label("Click 'Open CSV' or drag and drop a CSV file here to get started");
                    ui.small("Required columns: orders, inventory_level");
                });
            }
        });

        ui::render_drop_overlay(ctx);
        ui::render_help_dialog(self, ctx);
    }
}
