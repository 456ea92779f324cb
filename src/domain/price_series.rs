use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::price_point::{PricePoint, RawPriceRow};

/// Daily closes for one security, ascending by date, one entry per date.
///
/// The only way to build one is through `from_raw_rows` / `from_points`,
/// which enforce the ordering and uniqueness invariants.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Drops rows with a missing date or unusable close, keeps the first row
    /// seen for each date, then sorts ascending.
    pub fn from_raw_rows(rows: impl IntoIterator<Item = RawPriceRow>) -> Self {
        Self::from_points(rows.into_iter().filter_map(RawPriceRow::into_point))
    }

    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        let mut seen = HashSet::new();
        let mut points: Vec<PricePoint> = points
            .into_iter()
            .filter(|p| p.close.is_finite())
            .filter(|p| seen.insert(p.date))
            .collect();
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn get(&self, idx: usize) -> Option<&PricePoint> {
        self.points.get(idx)
    }

    /// The ordered date index of the series.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Contiguous sub-slice with `start <= date <= end`.
    pub fn range_inclusive(&self, start: NaiveDate, end: NaiveDate) -> &[PricePoint] {
        if end < start {
            return &[];
        }
        let lo = self.points.partition_point(|p| p.date < start);
        let hi = self.points.partition_point(|p| p.date <= end);
        &self.points[lo..hi]
    }
}
