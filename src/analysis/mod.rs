// Pure analytics over a PriceSeries
pub mod error;
pub mod resample;
pub mod returns;
pub mod snap;
pub mod window;
pub mod yearly;

// Re-export commonly used types
pub use error::AnalysisError;
pub use resample::ResampledPoint;
pub use returns::{HoldingPeriodReturn, ReturnSummary};
pub use snap::{nearest_position, nearest_trading_day, snap_to_index};
pub use window::WindowSegment;
pub use yearly::{YearEndRow, YearMarker};
