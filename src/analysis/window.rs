//! Date-bounded windows around a snapped event date.

use chrono::{Duration, NaiveDate};

use crate::analysis::error::AnalysisError;
use crate::analysis::snap::nearest_trading_day;
use crate::domain::{PricePoint, PriceSeries};
use crate::utils::maths_utils::pct_change;

/// Observations within `radius_days` calendar days of the snapped target,
/// plus the moves into and out of the snapped close.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSegment {
    pub target: NaiveDate,
    pub snap: PricePoint,
    pub radius_days: i64,
    /// `snap - radius_days`, clamped to the calendar range
    pub start: NaiveDate,
    /// `snap + radius_days`, clamped to the calendar range
    pub end: NaiveDate,
    pub points: Vec<PricePoint>,
    /// Close of the observation before the snap, if there is one
    pub prev_close: Option<f64>,
    /// Close of the observation after the snap, if there is one
    pub next_close: Option<f64>,
    /// `(snap / prev - 1) * 100`
    pub prev_pct: Option<f64>,
    /// `(next / snap - 1) * 100`
    pub next_pct: Option<f64>,
}

/// `[center - radius_days, center + radius_days]`, saturating at the
/// earliest and latest representable dates.
pub fn window_bounds(center: NaiveDate, radius_days: i64) -> (NaiveDate, NaiveDate) {
    let radius = Duration::try_days(radius_days);
    let start = radius
        .and_then(|r| center.checked_sub_signed(r))
        .unwrap_or(NaiveDate::MIN);
    let end = radius
        .and_then(|r| center.checked_add_signed(r))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Closes either side of `pos` and the percentage moves relative to `pos`.
/// Series boundaries (and moves that are not finite) come back as `None`.
pub fn adjacent_deltas(
    series: &PriceSeries,
    pos: usize,
) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
    let Some(curr) = series.get(pos).map(|p| p.close) else {
        return (None, None, None, None);
    };
    let prev_close = pos.checked_sub(1).and_then(|i| series.get(i)).map(|p| p.close);
    let next_close = series.get(pos + 1).map(|p| p.close);

    let prev_pct = prev_close
        .map(|prev| pct_change(prev, curr))
        .filter(|v| v.is_finite());
    let next_pct = next_close
        .map(|next| pct_change(curr, next))
        .filter(|v| v.is_finite());

    (prev_close, next_close, prev_pct, next_pct)
}

pub fn extract_window(
    series: &PriceSeries,
    target: NaiveDate,
    radius_days: i64,
) -> Result<WindowSegment, AnalysisError> {
    if radius_days < 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "window radius must be non-negative, got {} days",
            radius_days
        )));
    }

    let (pos, snap) = nearest_trading_day(target, series)?;
    let (start, end) = window_bounds(snap.date, radius_days);
    let points = series.range_inclusive(start, end).to_vec();
    let (prev_close, next_close, prev_pct, next_pct) = adjacent_deltas(series, pos);

    Ok(WindowSegment {
        target,
        snap,
        radius_days,
        start,
        end,
        points,
        prev_close,
        next_close,
        prev_pct,
        next_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn window_is_inclusive_and_excludes_dates_past_the_radius() {
        // Target 2023-12-31 snaps to Friday 2023-12-29 (2 days) over 2024-01-03 (3 days).
        // Nov 29 and Jan 28 sit exactly 30 days out, Nov 28 and Jan 29 one day further.
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2023, 11, 28), 1.0),
            PricePoint::new(d(2023, 11, 29), 2.0),
            PricePoint::new(d(2023, 12, 28), 3.0),
            PricePoint::new(d(2023, 12, 29), 4.0),
            PricePoint::new(d(2024, 1, 3), 5.0),
            PricePoint::new(d(2024, 1, 28), 6.0),
            PricePoint::new(d(2024, 1, 29), 7.0),
        ]);

        let window = extract_window(&series, d(2023, 12, 31), 30).unwrap();

        assert_eq!(window.snap.date, d(2023, 12, 29));
        assert_eq!((window.start, window.end), (d(2023, 11, 29), d(2024, 1, 28)));
        let dates: Vec<NaiveDate> = window.points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                d(2023, 11, 29),
                d(2023, 12, 28),
                d(2023, 12, 29),
                d(2024, 1, 3),
                d(2024, 1, 28)
            ]
        );
        assert!(window.points.iter().all(|p| p.date >= window.start && p.date <= window.end));
        assert_eq!(window.prev_close, Some(3.0));
        assert!(approx_eq(window.prev_pct.unwrap(), (4.0 / 3.0 - 1.0) * 100.0));
        assert!(approx_eq(window.next_pct.unwrap(), 25.0));
    }

    #[test]
    fn boundaries_yield_unavailable_deltas() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2022, 1, 3), 100.0),
            PricePoint::new(d(2022, 1, 4), 110.0),
        ]);

        let (prev_close, next_close, prev_pct, next_pct) = adjacent_deltas(&series, 0);
        assert_eq!(prev_close, None);
        assert_eq!(prev_pct, None);
        assert_eq!(next_close, Some(110.0));
        assert!(approx_eq(next_pct.unwrap(), 10.0));

        let (_, next_close, prev_pct, next_pct) = adjacent_deltas(&series, 1);
        assert_eq!(next_close, None);
        assert_eq!(next_pct, None);
        assert!(approx_eq(prev_pct.unwrap(), 10.0));
    }

    #[test]
    fn single_observation_has_no_deltas() {
        let series = PriceSeries::from_points(vec![PricePoint::new(d(2021, 12, 31), 600.0)]);
        let window = extract_window(&series, d(2021, 12, 31), 30).unwrap();
        assert_eq!(window.points.len(), 1);
        assert_eq!((window.prev_pct, window.next_pct), (None, None));
    }

    #[test]
    fn empty_series_and_negative_radius_fail() {
        assert_eq!(
            extract_window(&PriceSeries::default(), d(2021, 12, 31), 30),
            Err(AnalysisError::InvalidIndex)
        );
        let series = PriceSeries::from_points(vec![PricePoint::new(d(2021, 12, 31), 600.0)]);
        assert!(matches!(
            extract_window(&series, d(2021, 12, 31), -1),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn huge_radius_saturates_at_the_calendar_limits() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2021, 12, 30), 590.0),
            PricePoint::new(d(2021, 12, 31), 600.0),
        ]);

        for radius in [100_000_000, i64::MAX] {
            let window = extract_window(&series, d(2021, 12, 31), radius).unwrap();
            assert_eq!(window.start, NaiveDate::MIN);
            assert_eq!(window.end, NaiveDate::MAX);
            assert_eq!(window.points.len(), 2);
        }
    }
}
