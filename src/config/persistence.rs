//! File persistence configuration

/// Path for saving/loading application UI state (selected tab only)
pub const APP_STATE_PATH: &str = ".states.json";
