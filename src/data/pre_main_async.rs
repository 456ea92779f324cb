// Async code to run in main before egui starts up

use crate::Cli;
use crate::data::timeseries::json_version::JsonFileVersion;
use crate::data::timeseries::mysql_version::MySqlVersion;
use crate::data::timeseries::{CreatePriceSeries, LoadError};
use crate::domain::PriceSeries;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Picks exactly one source from the CLI. There is no fallback between them.
pub fn select_source(args: &Cli) -> Box<dyn CreatePriceSeries + Send + Sync> {
    match &args.json_file {
        Some(path) => Box::new(JsonFileVersion { path: path.clone() }),
        None => Box::new(MySqlVersion {
            settings: args.database_settings(),
        }),
    }
}

/// Loads the series once. Any failure, including an empty result, halts the run.
pub async fn fetch_price_series(args: &Cli) -> Result<PriceSeries, LoadError> {
    let source = select_source(args);
    load_from(source.as_ref()).await
}

pub async fn load_from(source: &(dyn CreatePriceSeries + Send + Sync)) -> Result<PriceSeries, LoadError> {
    #[cfg(debug_assertions)]
    let start_time = DEBUG_FLAGS.print_load.then(std::time::Instant::now);

    let series = source.create_price_series().await.map_err(|e| {
        log::error!("❌ {} load failed: {}", source.signature(), e);
        e
    })?;

    if series.is_empty() {
        log::error!("❌ {} returned no usable rows", source.signature());
        return Err(LoadError::EmptyDataset);
    }

    #[cfg(debug_assertions)]
    if let Some(start) = start_time {
        log::info!(
            "✅ Loaded {} closes via {} in {:.2}s",
            series.len(),
            source.signature(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EmptySource;

    #[async_trait]
    impl CreatePriceSeries for EmptySource {
        fn signature(&self) -> &'static str {
            "Empty"
        }

        async fn create_price_series(&self) -> Result<PriceSeries, LoadError> {
            Ok(PriceSeries::default())
        }
    }

    struct UnreachableSource;

    #[async_trait]
    impl CreatePriceSeries for UnreachableSource {
        fn signature(&self) -> &'static str {
            "Unreachable"
        }

        async fn create_price_series(&self) -> Result<PriceSeries, LoadError> {
            Err(LoadError::Connection("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn empty_result_is_an_error() {
        assert_eq!(load_from(&EmptySource).await, Err(LoadError::EmptyDataset));
    }

    #[tokio::test]
    async fn connection_errors_pass_through_unchanged() {
        assert_eq!(
            load_from(&UnreachableSource).await,
            Err(LoadError::Connection("connection refused".to_string()))
        );
    }
}
