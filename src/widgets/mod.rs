//! Reusable UI widgets for the inventory optimizer

mod param_controls;
mod threshold_card;

pub use param_controls::ParamControls;
pub use threshold_card::ThresholdCard;
