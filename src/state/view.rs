//! View and visualization state

use crate::constants::chart::DEFAULT_LINE_WIDTH;
use serde::{Deserialize, Serialize};

/// Display preferences that can be saved to and loaded from JSON.
///
/// Parameters and data are never part of this file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub dark_mode: bool,
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_data_table: bool,
    pub line_width: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_grid: true,
            show_legend: true,
            show_data_table: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// View state manages all visualization and display options
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show help panel
    pub show_help: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Legend visibility
    pub show_legend: bool,

    /// Data table panel visibility
    pub show_data_table: bool,

    /// Inventory line width
    pub line_width: f32,

    /// Allow zooming the chart
    pub allow_zoom: bool,

    /// Allow panning the chart
    pub allow_drag: bool,

    /// Reset chart bounds on next frame
    pub reset_bounds: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        let mut view = Self {
            dark_mode: false,
            show_help: false,
            show_grid: true,
            show_legend: true,
            show_data_table: false,
            line_width: DEFAULT_LINE_WIDTH,
            allow_zoom: true,
            allow_drag: true,
            reset_bounds: false,
        };
        view.apply_config(&ViewConfig::default());
        view
    }
}

impl ViewState {
    /// Snapshot the persistable display preferences
    pub fn to_config(&self) -> ViewConfig {
        ViewConfig {
            dark_mode: self.dark_mode,
            show_grid: self.show_grid,
            show_legend: self.show_legend,
            show_data_table: self.show_data_table,
            line_width: self.line_width,
        }
    }

    pub fn apply_config(&mut self, config: &ViewConfig) {
        self.dark_mode = config.dark_mode;
        self.show_grid = config.show_grid;
        self.show_legend = config.show_legend;
        self.show_data_table = config.show_data_table;
        self.line_width = config.line_width.clamp(0.5, 8.0);
        self.reset_bounds = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip_through_view() {
        let mut view = ViewState::default();
        view.dark_mode = true;
        view.show_data_table = true;
        let config = view.to_config();

        let mut other = ViewState::default();
        other.apply_config(&config);
        assert_eq!(other.to_config(), config);
        assert!(other.reset_bounds);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ViewConfig = serde_json::from_str(r#"{ "dark_mode": true }"#).unwrap();
        assert!(config.dark_mode);
        assert!(config.show_grid);
        assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_line_width_is_clamped() {
        let mut view = ViewState::default();
        view.apply_config(&ViewConfig {
            line_width: 100.0,
            ..ViewConfig::default()
        });
        assert_eq!(view.line_width, 8.0);
    }
}
