#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{LoadError, fetch_price_series};
pub use domain::{PricePoint, PriceSeries};
pub use models::DashboardModel;
pub use ui::YearEndDashboardApp;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

use crate::config::{DATABASE, DEFAULT_SYMBOL, DatabaseSettings};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker shown in titles
    #[arg(long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Read closes from a JSON file instead of the database
    #[arg(long)]
    pub json_file: Option<PathBuf>,

    /// Print the analytics to stdout and exit instead of opening the dashboard
    #[arg(long, default_value_t = false)]
    pub no_gui: bool,

    #[arg(long, env = "DASHBOARD_DB_HOST", default_value = DATABASE.host)]
    pub db_host: String,

    #[arg(long, env = "DASHBOARD_DB_PORT", default_value_t = DATABASE.port)]
    pub db_port: u16,

    #[arg(long, env = "DASHBOARD_DB_USER", default_value = DATABASE.user)]
    pub db_user: String,

    #[arg(long, env = "DASHBOARD_DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    #[arg(long, env = "DASHBOARD_DB_NAME", default_value = DATABASE.database)]
    pub db_name: String,

    /// Table holding the (Date, Close) rows
    #[arg(long, env = "DASHBOARD_DB_TABLE", default_value = DATABASE.table)]
    pub db_table: String,
}

impl Cli {
    pub fn database_settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            table: self.db_table.clone(),
        }
    }

    /// Copy safe to print in logs
    pub fn redacted(mut self) -> Self {
        if !self.db_password.is_empty() {
            self.db_password = "***".to_string();
        }
        self
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    loaded: Result<DashboardModel, LoadError>,
) -> Box<dyn eframe::App> {
    Box::new(ui::YearEndDashboardApp::new(cc, loaded))
}
