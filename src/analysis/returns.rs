//! Headline return figures: total, simple annual average and CAGR.

use chrono::NaiveDate;

use crate::analysis::error::AnalysisError;
use crate::analysis::snap::nearest_trading_day;
use crate::domain::{PricePoint, PriceSeries};

/// Return figures between a start and an end price over a fixed number of years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnSummary {
    pub start_price: f64,
    pub end_price: f64,
    pub years: f64,
    pub total_return_pct: f64,
    pub simple_average_pct: f64,
    pub cagr_pct: f64,
}

impl ReturnSummary {
    pub fn from_prices(start_price: f64, end_price: f64, years: f64) -> Result<Self, AnalysisError> {
        if !start_price.is_finite() || start_price <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "start price must be positive, got {}",
                start_price
            )));
        }
        if !end_price.is_finite() || end_price < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "end price must be a non-negative number, got {}",
                end_price
            )));
        }
        if !years.is_finite() || years <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "holding period must be positive, got {} years",
                years
            )));
        }

        let growth = end_price / start_price;
        let total_return_pct = (growth - 1.0) * 100.0;
        Ok(Self {
            start_price,
            end_price,
            years,
            total_return_pct,
            simple_average_pct: total_return_pct / years,
            cagr_pct: (growth.powf(1.0 / years) - 1.0) * 100.0,
        })
    }
}

/// A `ReturnSummary` together with the two observations it was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldingPeriodReturn {
    pub start: PricePoint,
    pub end: PricePoint,
    pub summary: ReturnSummary,
}

/// First observation of the series against the trading day nearest `end_target`.
pub fn holding_period_return(
    series: &PriceSeries,
    end_target: NaiveDate,
    years: f64,
) -> Result<HoldingPeriodReturn, AnalysisError> {
    let start = *series.first().ok_or(AnalysisError::InvalidIndex)?;
    let (_, end) = nearest_trading_day(end_target, series)?;
    let summary = ReturnSummary::from_prices(start.close, end.close, years)?;
    Ok(HoldingPeriodReturn {
        start,
        end,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn hundred_to_one_fifty_over_five_years() {
        let summary = ReturnSummary::from_prices(100.0, 150.0, 5.0).unwrap();
        assert!(approx_eq(summary.total_return_pct, 50.0, 1e-9));
        assert!(approx_eq(summary.simple_average_pct, 10.0, 1e-9));
        assert!(approx_eq(summary.cagr_pct, 8.45, 0.005));
    }

    #[test]
    fn non_positive_start_is_rejected() {
        assert!(matches!(
            ReturnSummary::from_prices(0.0, 150.0, 5.0),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            ReturnSummary::from_prices(-1.0, 150.0, 5.0),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            ReturnSummary::from_prices(100.0, f64::NAN, 5.0),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            ReturnSummary::from_prices(100.0, 150.0, 0.0),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn end_observation_is_chosen_by_date_not_position() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2020, 1, 2), 100.0),
            PricePoint::new(d(2024, 12, 30), 140.0),
            PricePoint::new(d(2025, 1, 2), 150.0),
            PricePoint::new(d(2025, 6, 2), 500.0),
        ]);

        let hpr = holding_period_return(&series, d(2024, 12, 31), 5.0).unwrap();
        assert_eq!(hpr.start.date, d(2020, 1, 2));
        assert_eq!(hpr.end.date, d(2024, 12, 30));
        assert!(approx_eq(hpr.summary.total_return_pct, 40.0, 1e-9));
    }
}
