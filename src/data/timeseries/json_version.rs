use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::data::timeseries::{CreatePriceSeries, LoadError};
use crate::domain::{PriceSeries, RawPriceRow};

/// Offline source: a JSON array of `{"Date": "YYYY-MM-DD", "Close": 123.4}` rows.
/// Lower-case keys are accepted too, and `null` closes are dropped on cleaning.
pub struct JsonFileVersion {
    pub path: PathBuf,
}

async fn read_rows(path: &Path) -> Result<Vec<RawPriceRow>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to open {:?}", path))?;
    let rows = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse price rows in {:?}", path))?;
    Ok(rows)
}

#[async_trait]
impl CreatePriceSeries for JsonFileVersion {
    fn signature(&self) -> &'static str {
        "JSON File"
    }

    async fn create_price_series(&self) -> Result<PriceSeries, LoadError> {
        let rows = read_rows(&self.path)
            .await
            .map_err(|e| LoadError::File(format!("{:#}", e)))?;
        Ok(PriceSeries::from_raw_rows(rows))
    }
}
