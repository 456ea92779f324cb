//! Relational source defaults.
//!
//! Every value here can be overridden from the command line or the matching
//! `DASHBOARD_DB_*` environment variable, see `crate::Cli`.

pub struct DatabaseDefaults {
    pub host: &'static str,
    pub port: u16,
    pub user: &'static str,
    pub database: &'static str,
    pub table: &'static str,
    /// Column holding the trading date
    pub date_column: &'static str,
    /// Column holding the closing price
    pub close_column: &'static str,
    pub connect_timeout_secs: u64,
}

pub const DATABASE: DatabaseDefaults = DatabaseDefaults {
    host: "127.0.0.1",
    port: 3306,
    user: "dashboard",
    database: "market_data",
    table: "nflx_final",
    date_column: "Date",
    close_column: "Close",
    connect_timeout_secs: 10,
};

/// Default ticker shown in titles
pub const DEFAULT_SYMBOL: &str = "NFLX";

/// Resolved connection settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: DATABASE.host.to_string(),
            port: DATABASE.port,
            user: DATABASE.user.to_string(),
            password: String::new(),
            database: DATABASE.database.to_string(),
            table: DATABASE.table.to_string(),
        }
    }
}
