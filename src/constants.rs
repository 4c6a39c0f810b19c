//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Reorder parameter defaults
pub mod params {
    /// Default lead time between placing a reorder and receiving stock
    pub const DEFAULT_LEAD_TIME_DAYS: f64 = 5.0;

    /// Default safety stock markup, in percent
    pub const DEFAULT_SAFETY_STOCK_PERCENT: f64 = 20.0;

    /// Multiplier applied to the medium threshold to get the high threshold
    pub const HIGH_THRESHOLD_MULTIPLIER: f64 = 1.2;
}

/// CSV ingestion
pub mod ingest {
    pub const COL_PRODUCT_ID: &str = "product_id";
    pub const COL_PRODUCT_NAME: &str = "product_name";
    pub const COL_DATE: &str = "date";
    pub const COL_INVENTORY_LEVEL: &str = "inventory_level";
    pub const COL_ORDERS: &str = "orders";
    pub const COL_LEAD_TIME_DAYS: &str = "lead_time_days";

    /// Accepted file extensions
    pub const EXTENSIONS: &[&str] = &["csv"];

    /// Formats tried, in order, when reading the date column as a calendar date
    pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
}

/// Chart defaults
pub mod chart {
    /// Lower axis bound is the smallest value scaled by this factor
    pub const LOWER_PADDING: f64 = 0.9;

    /// Upper axis bound is the largest value scaled by this factor
    pub const UPPER_PADDING: f64 = 1.1;

    /// Inventory series stroke width
    pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

    /// Dash length for threshold reference lines
    pub const REFERENCE_DASH_LENGTH: f32 = 6.0;
}

/// Performance and optimization constants
pub mod performance {
    /// Maximum number of recent files to track
    pub const MAX_RECENT_FILES: usize = 5;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (upload, parameters, thresholds) default width
    pub const CONTROLS_PANEL_WIDTH: f32 = 300.0;

    /// Right panel (data table) default width
    pub const DATA_PANEL_WIDTH: f32 = 460.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;

    /// Minimum chart height
    pub const MIN_CHART_HEIGHT: f32 = 200.0;
}

/// Threshold colours, shared by the cards and the chart
pub mod colors {
    use egui::Color32;

    pub const LOW: Color32 = Color32::from_rgb(214, 39, 40);
    pub const MEDIUM: Color32 = Color32::from_rgb(255, 140, 0);
    pub const HIGH: Color32 = Color32::from_rgb(44, 160, 44);
    pub const INVENTORY: Color32 = Color32::from_rgb(136, 132, 216);
}

/// Configuration file paths
pub mod config {
    /// Suggested file name for saved view preferences
    pub const VIEW_CONFIG_FILE: &str = "inventory-optimizer-view.json";

    /// Log filter used when `RUST_LOG` is not set
    pub const DEFAULT_LOG_FILTER: &str = "inventory_optimizer=info";
}
