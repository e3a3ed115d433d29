// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Team comparison selectors. `None` → use the default pair (two best ranks).
    pub compare_first: Option<String>,
    pub compare_second: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            compare_first: None,
            compare_second: None,
        }
    }
}

impl GuiState {
    /// New table → selections fall back to its defaults.
    pub fn reset_comparison(&mut self) {
        self.compare_first = None;
        self.compare_second = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
