//! Configuration module for the dashboard.

pub mod analysis;
pub mod database;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use database::{DATABASE, DEFAULT_SYMBOL, DatabaseSettings};
pub use persistence::APP_STATE_PATH;
