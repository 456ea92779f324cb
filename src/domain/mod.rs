// Domain types and value objects
pub mod price_point;
pub mod price_series;

// Re-export commonly used types
pub use price_point::{PricePoint, RawPriceRow};
pub use price_series::PriceSeries;
