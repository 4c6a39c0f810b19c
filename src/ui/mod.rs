mod chart;
mod data_table;
mod help_dialog;
mod params_panel;
mod thresholds_panel;
mod toolbar;

pub use chart::render_chart;
pub use data_table::render_data_table_panel;
pub use help_dialog::render_help_dialog;
pub use params_panel::render_params_panel;
pub use thresholds_panel::render_thresholds_panel;
pub use toolbar::{
    handle_dropped_files, render_banner, render_drop_overlay, render_status_bar, render_toolbar,
};
