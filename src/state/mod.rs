//! Application state management
//!
//! The inventory analysis (records, parameters, thresholds) is kept apart from
//! view preferences and transient UI state.

mod analysis;
mod ui;
mod view;

pub use analysis::{Analysis, Parameters};
pub use ui::UiState;
pub use view::{ViewConfig, ViewState};

use crate::constants::performance::MAX_RECENT_FILES;
use std::path::PathBuf;

/// Main application state container
#[derive(Default)]
pub struct AppState {
    /// Loaded records, current parameters and the derived thresholds
    pub analysis: Analysis,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,

    /// Name of the currently loaded file
    pub current_file: Option<String>,

    /// Rows rejected from the currently loaded file
    pub rejected_rows: usize,

    /// Recently opened files (this session only)
    pub recent_files: Vec<PathBuf>,
}

impl AppState {
    /// Check if data is loaded
    pub fn has_data(&self) -> bool {
        self.analysis.has_records()
    }

    /// Move `path` to the front of the recent files list
    pub fn remember_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_files_move_to_front_and_cap() {
        let mut state = AppState::default();
        for i in 0..7 {
            state.remember_file(PathBuf::from(format!("f{}.csv", i)));
        }
        assert_eq!(state.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(state.recent_files[0], PathBuf::from("f6.csv"));

        state.remember_file(PathBuf::from("f4.csv"));
        assert_eq!(state.recent_files[0], PathBuf::from("f4.csv"));
        assert_eq!(state.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(
            state.recent_files.iter().filter(|p| **p == PathBuf::from("f4.csv")).count(),
            1
        );
    }
}
