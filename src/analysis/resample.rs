//! Period-end resampling: each bin keeps its last close, empty bins vanish.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use itertools::Itertools;

use crate::domain::{PricePoint, PriceSeries};
use crate::utils::TimeUtils;

/// One resampled bar, labelled by the period end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampledPoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl ResampledPoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Dates of a resampled series, ready to be used as a snap index.
pub fn index_of(points: &[ResampledPoint]) -> Vec<NaiveDate> {
    points.iter().map(|p| p.date).collect()
}

fn last_close_per_label<F>(points: &[PricePoint], label: F) -> Vec<ResampledPoint>
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    // Input is sorted by date and `label` is monotone, so equal labels are contiguous
    let chunks = points.iter().chunk_by(|p| label(p.date));
    chunks
        .into_iter()
        .filter_map(|(period_end, group)| {
            group
                .last()
                .map(|p| ResampledPoint::new(period_end, p.close))
        })
        .collect()
}

/// Two-week bars closing on Fridays.
///
/// The first bar ends on the first Friday on or after the first observation;
/// later bars end every 14 days after it. A date belongs to the first bar end
/// that is not earlier than it.
pub fn two_week_friday(series: &PriceSeries) -> Vec<ResampledPoint> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    let first_end = TimeUtils::next_weekday_on_or_after(first.date, Weekday::Fri);

    last_close_per_label(series.points(), |date| {
        let days = (date - first_end).num_days();
        // ceil(days / 14), also correct for the few days before `first_end`
        let periods = -(-days).div_euclid(TimeUtils::DAYS_IN_2_W);
        first_end + Duration::days(periods * TimeUtils::DAYS_IN_2_W)
    })
}

/// Calendar-year bars labelled Dec 31.
pub fn year_end(series: &PriceSeries) -> Vec<ResampledPoint> {
    last_close_per_label(series.points(), |date| {
        TimeUtils::year_end(date.year()).unwrap_or(date)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn weekdays(from: NaiveDate, to: NaiveDate) -> PriceSeries {
        let mut points = Vec::new();
        let mut date = from;
        let mut close = 100.0;
        while date <= to {
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                points.push(PricePoint::new(date, close));
                close += 1.0;
            }
            date += Duration::days(1);
        }
        PriceSeries::from_points(points)
    }

    #[test]
    fn two_week_bars_end_on_fridays_fourteen_days_apart() {
        // 2021-01-06 is a Wednesday
        let series = weekdays(d(2021, 1, 6), d(2021, 3, 31));
        let bars = two_week_friday(&series);

        assert_eq!(bars[0].date, d(2021, 1, 8));
        assert!(bars.iter().all(|b| b.date.weekday() == Weekday::Fri));
        assert!(
            bars.windows(2)
                .all(|w| (w[1].date - w[0].date).num_days() == 14)
        );

        // First bar holds Jan 6..=Jan 8 and keeps the Jan 8 close
        assert_eq!(bars[0].close, 102.0);
        // Second bar ends Jan 22 (Jan 11..=Jan 22 are ten more weekdays)
        assert_eq!(bars[1].date, d(2021, 1, 22));
        assert_eq!(bars[1].close, 112.0);
        // Trailing partial bin is labelled with its (future) Friday
        assert_eq!(bars.last().unwrap().date, d(2021, 4, 2));
    }

    #[test]
    fn empty_two_week_bins_are_dropped() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2021, 1, 8), 1.0),
            PricePoint::new(d(2021, 3, 1), 2.0),
        ]);
        let bars = two_week_friday(&series);
        assert_eq!(
            bars,
            vec![
                ResampledPoint::new(d(2021, 1, 8), 1.0),
                ResampledPoint::new(d(2021, 3, 5), 2.0)
            ]
        );
    }

    #[test]
    fn year_end_keeps_the_last_close_of_each_year() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2021, 6, 1), 1.0),
            PricePoint::new(d(2021, 12, 30), 2.0),
            PricePoint::new(d(2023, 1, 3), 3.0),
            PricePoint::new(d(2023, 12, 29), 4.0),
        ]);
        assert_eq!(
            year_end(&series),
            vec![
                ResampledPoint::new(d(2021, 12, 31), 2.0),
                ResampledPoint::new(d(2023, 12, 31), 4.0)
            ]
        );
        assert!(two_week_friday(&PriceSeries::default()).is_empty());
    }
}
