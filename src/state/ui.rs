//! UI interaction state

/// UI state holds banners and data table interaction
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in UI (banner), with its title
    pub error_message: Option<(String, String)>,

    /// Non-fatal notice about the last load (rejected rows)
    pub warning_message: Option<String>,

    /// Search/filter string for data table rows
    pub row_filter: String,

    /// Data version counter (increments on load)
    pub data_version: u64,
}

impl UiState {
    /// Increment data version (call after loading new data)
    pub fn on_data_loaded(&mut self, rejected_rows: usize) {
        self.data_version += 1;
        self.row_filter.clear();
        self.error_message = None;
        self.warning_message = (rejected_rows > 0).then(|| {
            format!(
                "⚠ {} row(s) skipped: missing or non-numeric orders, inventory level or lead time",
                rejected_rows
            )
        });
    }

    /// Set an error message
    pub fn set_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_message = Some((title.into(), message.into()));
    }

    /// Clear the current error and warning
    pub fn dismiss(&mut self) {
        self.error_message = None;
        self.warning_message = None;
    }

    /// Check if a filter is active
    pub fn has_filter(&self) -> bool {
        !self.row_filter.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sets_warning_only_for_rejections() {
        let mut ui = UiState::default();
        ui.set_error("CSV Error", "bad");
        ui.row_filter = "P001".to_string();

        ui.on_data_loaded(0);
        assert_eq!(ui.data_version, 1);
        assert!(ui.error_message.is_none());
        assert!(ui.warning_message.is_none());
        assert!(!ui.has_filter());

        ui.on_data_loaded(3);
        assert_eq!(ui.data_version, 2);
        assert!(ui.warning_message.as_deref().unwrap().contains("3 row(s)"));

        ui.dismiss();
        assert!(ui.warning_message.is_none());
    }
}
