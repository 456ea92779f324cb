// Data loading
pub mod pre_main_async;
pub mod timeseries;

// Re-export commonly used types
pub use pre_main_async::fetch_price_series;
pub use timeseries::{CreatePriceSeries, LoadError};
