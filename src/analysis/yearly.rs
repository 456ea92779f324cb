//! Year-end closes: the YoY table and the Dec 31 markers.

use chrono::{Datelike, NaiveDate};

use crate::analysis::error::AnalysisError;
use crate::analysis::resample::{ResampledPoint, index_of};
use crate::analysis::snap::nearest_position;
use crate::utils::TimeUtils;
use crate::utils::maths_utils::{pct_change, round_to};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearEndRow {
    pub year: i32,
    pub close_ye: f64,
    pub prev_close_ye: Option<f64>,
    pub yoy_pct: Option<f64>,
}

/// YoY rows for the years in `first_year..=last_year`.
///
/// `year_ends` is the output of `resample::year_end`. The previous close is
/// taken from the previous row *inside* the requested range, so the first
/// row never has one.
pub fn year_over_year(
    year_ends: &[ResampledPoint],
    first_year: i32,
    last_year: i32,
    decimals: i32,
) -> Vec<YearEndRow> {
    let mut prev: Option<f64> = None;
    year_ends
        .iter()
        .filter(|p| (first_year..=last_year).contains(&p.date.year()))
        .map(|p| {
            let yoy_pct = prev
                .map(|prev_close| round_to(pct_change(prev_close, p.close), decimals))
                .filter(|v| v.is_finite());
            let row = YearEndRow {
                year: p.date.year(),
                close_ye: p.close,
                prev_close_ye: prev,
                yoy_pct,
            };
            prev = Some(p.close);
            row
        })
        .collect()
}

/// Dec 31 of `year`, snapped onto a resampled index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearMarker {
    pub year: i32,
    pub target: NaiveDate,
    pub date: NaiveDate,
    pub close: f64,
}

pub fn year_end_markers(
    resampled: &[ResampledPoint],
    years: impl IntoIterator<Item = i32>,
) -> Result<Vec<YearMarker>, AnalysisError> {
    let index = index_of(resampled);
    years
        .into_iter()
        .map(|year| {
            let target = TimeUtils::year_end(year).ok_or_else(|| {
                AnalysisError::InvalidInput(format!("year {} is out of range", year))
            })?;
            let pos = nearest_position(target, &index)?;
            let point = resampled[pos];
            Ok(YearMarker {
                year,
                target,
                date: point.date,
                close: point.close,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resample::year_end;
    use crate::domain::{PricePoint, PriceSeries};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn yoy_matches_hand_computed_rows() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2020, 12, 31), 540.0),
            PricePoint::new(d(2021, 3, 1), 520.0),
            PricePoint::new(d(2021, 12, 31), 500.0),
            PricePoint::new(d(2022, 12, 30), 400.0),
            PricePoint::new(d(2023, 12, 29), 600.0),
            PricePoint::new(d(2024, 12, 31), 900.0),
            PricePoint::new(d(2025, 3, 3), 1000.0),
        ]);

        let rows = year_over_year(&year_end(&series), 2021, 2024, 2);

        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2021, 2022, 2023, 2024]);
        let yoy: Vec<Option<f64>> = rows.iter().map(|r| r.yoy_pct).collect();
        assert_eq!(yoy, vec![None, Some(-20.0), Some(50.0), Some(50.0)]);
        assert_eq!(rows[0].prev_close_ye, None);
        assert_eq!(rows[3].prev_close_ye, Some(600.0));
    }

    #[test]
    fn markers_snap_onto_the_resampled_index() {
        let resampled = vec![
            ResampledPoint::new(d(2021, 12, 24), 10.0),
            ResampledPoint::new(d(2022, 1, 7), 11.0),
            ResampledPoint::new(d(2022, 12, 30), 12.0),
        ];

        let markers = year_end_markers(&resampled, [2021, 2022]).unwrap();

        assert_eq!(markers[0].date, d(2022, 1, 7));
        assert_eq!(markers[0].target, d(2021, 12, 31));
        assert_eq!(markers[1].date, d(2022, 12, 30));
        assert_eq!(markers[1].close, 12.0);
        assert_eq!(
            year_end_markers(&[], [2021]),
            Err(AnalysisError::InvalidIndex)
        );
    }
}
