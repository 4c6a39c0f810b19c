pub mod axis;
pub mod record;
pub mod source;
pub mod thresholds;

// Re-export key types for convenience
pub use axis::y_axis_bounds;
pub use record::{InventoryRecord, date_span};
pub use source::LoadedInventory;
pub use thresholds::{ThresholdCalculation, Thresholds, compute_thresholds};
