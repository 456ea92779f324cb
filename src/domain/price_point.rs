use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cleaned daily observation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A row as it comes out of a loader, before cleaning.
/// Either column may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPriceRow {
    #[serde(alias = "Date")]
    pub date: Option<NaiveDate>,
    #[serde(alias = "Close")]
    pub close: Option<f64>,
}

impl RawPriceRow {
    /// `None` unless both columns are present and the close is a finite number.
    pub fn into_point(self) -> Option<PricePoint> {
        match (self.date, self.close) {
            (Some(date), Some(close)) if close.is_finite() => Some(PricePoint::new(date, close)),
            _ => None,
        }
    }
}
