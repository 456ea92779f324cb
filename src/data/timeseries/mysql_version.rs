use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use std::time::Duration;

use crate::config::{DATABASE, DatabaseSettings};
use crate::data::timeseries::{CreatePriceSeries, LoadError};
use crate::domain::{PriceSeries, RawPriceRow};

#[derive(Debug, sqlx::FromRow)]
struct DbPriceRow {
    trade_date: Option<NaiveDate>,
    close: Option<f64>,
}

impl From<DbPriceRow> for RawPriceRow {
    fn from(row: DbPriceRow) -> Self {
        RawPriceRow {
            date: row.trade_date,
            close: row.close,
        }
    }
}

/// True for names that can be spliced into SQL between backticks.
pub fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn checked_identifier<'a>(what: &str, name: &'a str) -> Result<&'a str, LoadError> {
    if is_plain_identifier(name) {
        Ok(name)
    } else {
        Err(LoadError::InvalidConfig(format!(
            "{} name '{}' must only contain letters, digits and '_'",
            what, name
        )))
    }
}

/// The one query this program runs: distinct (date, close) pairs, oldest first.
pub fn select_closes_query(settings: &DatabaseSettings) -> Result<String, LoadError> {
    let database = checked_identifier("database", &settings.database)?;
    let table = checked_identifier("table", &settings.table)?;
    let date_column = checked_identifier("date column", DATABASE.date_column)?;
    let close_column = checked_identifier("close column", DATABASE.close_column)?;

    Ok(format!(
        "SELECT DISTINCT CAST(`{date_column}` AS DATE) AS trade_date, \
         CAST(`{close_column}` AS DOUBLE) AS close \
         FROM `{database}`.`{table}` \
         ORDER BY trade_date ASC"
    ))
}

pub struct MySqlVersion {
    pub settings: DatabaseSettings,
}

#[async_trait]
impl CreatePriceSeries for MySqlVersion {
    fn signature(&self) -> &'static str {
        "MySQL"
    }

    async fn create_price_series(&self) -> Result<PriceSeries, LoadError> {
        // Validate before touching the network
        let query = select_closes_query(&self.settings)?;

        let options = MySqlConnectOptions::new()
            .host(&self.settings.host)
            .port(self.settings.port)
            .username(&self.settings.user)
            .password(&self.settings.password)
            .database(&self.settings.database);

        log::info!(
            "Connecting to {}@{}:{}/{}...",
            self.settings.user,
            self.settings.host,
            self.settings.port,
            self.settings.database
        );

        let timeout = Duration::from_secs(DATABASE.connect_timeout_secs);
        let mut conn = tokio::time::timeout(timeout, MySqlConnection::connect_with(&options))
            .await
            .map_err(|_| {
                LoadError::Connection(format!(
                    "no answer from {}:{} within {}s",
                    self.settings.host, self.settings.port, DATABASE.connect_timeout_secs
                ))
            })?
            .map_err(|e| LoadError::Connection(e.to_string()))?;

        let fetched = sqlx::query_as::<_, DbPriceRow>(&query)
            .fetch_all(&mut conn)
            .await
            .map_err(|e| LoadError::Query(e.to_string()));

        // Close regardless of the query outcome
        if let Err(e) = conn.close().await {
            log::warn!("⚠️  Failed to close database connection cleanly: {}", e);
        }

        let rows = fetched?;
        let raw_count = rows.len();
        let series = PriceSeries::from_raw_rows(rows.into_iter().map(RawPriceRow::from));
        log::info!(
            "Fetched {} rows from {}.{} ({} after cleaning)",
            raw_count,
            self.settings.database,
            self.settings.table,
            series.len()
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_validated() {
        assert!(is_plain_identifier("nflx_final"));
        assert!(is_plain_identifier("Prices2024"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("nflx`; DROP TABLE x; --"));
        assert!(!is_plain_identifier("db.table"));
    }

    #[test]
    fn query_selects_distinct_ordered_closes() {
        let settings = DatabaseSettings {
            database: "our_project_db".to_string(),
            table: "nflx_final".to_string(),
            ..Default::default()
        };
        let query = select_closes_query(&settings).unwrap();
        assert!(query.starts_with("SELECT DISTINCT"));
        assert!(query.contains("FROM `our_project_db`.`nflx_final`"));
        assert!(query.ends_with("ORDER BY trade_date ASC"));
    }

    #[tokio::test]
    async fn unsafe_table_is_rejected_before_connecting() {
        let loader = MySqlVersion {
            settings: DatabaseSettings {
                table: "prices; --".to_string(),
                ..Default::default()
            },
        };
        let result = loader.create_price_series().await;
        assert!(matches!(result, Err(LoadError::InvalidConfig(_))));
    }
}
