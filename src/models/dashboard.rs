use chrono::NaiveDate;

use crate::analysis::resample::{self, ResampledPoint};
use crate::analysis::returns::{HoldingPeriodReturn, holding_period_return};
use crate::analysis::window::{WindowSegment, extract_window};
use crate::analysis::yearly::{YearEndRow, YearMarker, year_end_markers, year_over_year};
use crate::analysis::AnalysisError;
use crate::config::analysis::AnalysisConfig;
use crate::domain::PriceSeries;
use crate::utils::TimeUtils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Zoom window for one year. A failed window does not fail the dashboard.
#[derive(Debug, Clone)]
pub struct YearWindow {
    pub year: i32,
    pub segment: Result<WindowSegment, AnalysisError>,
}

/// Everything the three tabs render, derived once from the loaded series.
///
/// Renderers receive this by reference; there is no other shared state.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub symbol: String,
    pub series: PriceSeries,
    pub two_week: Vec<ResampledPoint>,
    pub markers: Result<Vec<YearMarker>, AnalysisError>,
    pub returns: Result<HoldingPeriodReturn, AnalysisError>,
    pub year_end_rows: Vec<YearEndRow>,
    pub windows: Vec<YearWindow>,
}

impl DashboardModel {
    pub fn build(symbol: impl Into<String>, series: PriceSeries, config: &AnalysisConfig) -> Self {
        let two_week = resample::two_week_friday(&series);
        let markers = year_end_markers(&two_week, config.year_end.years());

        let returns = NaiveDate::parse_from_str(
            config.returns.end_date,
            TimeUtils::STANDARD_TIME_FORMAT,
        )
        .map_err(|e| {
            AnalysisError::InvalidInput(format!(
                "end date '{}' is not a date: {}",
                config.returns.end_date, e
            ))
        })
        .and_then(|end| holding_period_return(&series, end, config.returns.holding_years));

        let year_end_rows = year_over_year(
            &resample::year_end(&series),
            config.year_end.first_year,
            config.year_end.last_year,
            config.yoy_decimals,
        );

        let windows = config
            .year_end
            .years()
            .map(|year| {
                let segment = TimeUtils::year_end(year)
                    .ok_or_else(|| {
                        AnalysisError::InvalidInput(format!("year {} is out of range", year))
                    })
                    .and_then(|target| {
                        extract_window(&series, target, config.year_end.window_radius_days)
                    });
                if let Err(e) = &segment {
                    log::warn!("Window for {} unavailable: {}", year, e);
                }
                YearWindow { year, segment }
            })
            .collect();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_snaps {
            if let Ok(markers) = &markers {
                for m in markers {
                    log::info!("{} year-end {} snapped to {}", m.year, m.target, m.date);
                }
            }
        }

        Self {
            symbol: symbol.into(),
            series,
            two_week,
            markers,
            returns,
            year_end_rows,
            windows,
        }
    }

    /// First and last observation dates, for headers.
    pub fn coverage(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.series.first()?.date, self.series.last()?.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use crate::domain::PricePoint;
    use chrono::{Datelike, Duration, Weekday};

    fn trading_days(from: NaiveDate, to: NaiveDate) -> PriceSeries {
        let mut points = Vec::new();
        let mut date = from;
        let mut close = 300.0;
        while date <= to {
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                points.push(PricePoint::new(date, close));
                close += 0.5;
            }
            date += Duration::days(1);
        }
        PriceSeries::from_points(points)
    }

    #[test]
    fn builds_every_view_from_one_series() {
        let series = trading_days(
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        );
        let model = DashboardModel::build("NFLX", series, &ANALYSIS);

        assert_eq!(model.markers.as_ref().unwrap().len(), 4);
        assert_eq!(model.year_end_rows.len(), 4);
        assert_eq!(model.windows.len(), 4);
        assert!(model.windows.iter().all(|w| w.segment.is_ok()));

        let hpr = model.returns.unwrap();
        // 2024-12-31 is a Tuesday, so it is in the series itself
        assert_eq!(hpr.end.date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(hpr.summary.total_return_pct > 0.0);
    }

    #[test]
    fn windows_outside_the_data_still_resolve_to_the_nearest_day() {
        let series = trading_days(
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
        );
        let model = DashboardModel::build("NFLX", series, &ANALYSIS);

        let first = model.windows[0].segment.as_ref().unwrap();
        assert_eq!(first.snap.date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        // The whole of June sits inside the +30 day radius
        assert_eq!(first.points.len(), model.series.len());
        assert_eq!(first.prev_pct, None);
    }
}
