//! Analysis and computation configuration

/// Year-end markers and the per-year zoom windows
pub struct YearEndSettings {
    // Inclusive range of calendar years that get a Dec 31 marker
    pub first_year: i32,
    pub last_year: i32,
    // Half-width of each zoom window (calendar days either side of the snapped date)
    pub window_radius_days: i64,
}

/// Settings for the headline return summary
pub struct ReturnSettings {
    // Fixed holding period used for simple average and CAGR.
    // Not derived from the observation dates.
    pub holding_years: f64,
    // The end observation is the trading day nearest to this date (YYYY-MM-DD)
    pub end_date: &'static str,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub year_end: YearEndSettings,
    pub returns: ReturnSettings,
    // Decimal places kept in the YoY table
    pub yoy_decimals: i32,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    year_end: YearEndSettings {
        first_year: 2021,
        last_year: 2024,
        window_radius_days: 30,
    },

    returns: ReturnSettings {
        holding_years: 5.0,
        end_date: "2024-12-31",
    },

    yoy_decimals: 2,
};

impl YearEndSettings {
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.first_year..=self.last_year
    }
}
