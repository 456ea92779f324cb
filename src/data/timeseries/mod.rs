pub mod json_version;
pub mod mysql_version;

use async_trait::async_trait;
use std::fmt;

use crate::domain::PriceSeries;

/// Why the price series could not be loaded. Every variant halts the run.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Could not reach or log in to the database
    Connection(String),
    /// Connected, but the query failed
    Query(String),
    /// Settings that would produce an unsafe or malformed query
    InvalidConfig(String),
    /// Local file source could not be read or parsed
    File(String),
    /// The source returned no usable rows
    EmptyDataset,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Connection(msg) => write!(f, "Database connection error: {}", msg),
            LoadError::Query(msg) => write!(f, "Query failed: {}", msg),
            LoadError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            LoadError::File(msg) => write!(f, "Could not read price file: {}", msg),
            LoadError::EmptyDataset => write!(f, "The price series is empty"),
        }
    }
}

impl std::error::Error for LoadError {}

#[async_trait]
pub trait CreatePriceSeries {
    /// Load and clean the series, or explain why not.
    async fn create_price_series(&self) -> Result<PriceSeries, LoadError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}
