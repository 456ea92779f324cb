//! Nearest-date snapping onto an ordered date index.

use chrono::NaiveDate;

use crate::analysis::error::AnalysisError;
use crate::domain::{PricePoint, PriceSeries};
use crate::utils::time_utils::abs_days_between;

/// Position of the index entry nearest to `target`.
///
/// `index` must be sorted ascending. When `target` sits exactly halfway
/// between two entries the later one wins.
pub fn nearest_position(target: NaiveDate, index: &[NaiveDate]) -> Result<usize, AnalysisError> {
    if index.is_empty() {
        return Err(AnalysisError::InvalidIndex);
    }
    debug_assert!(index.windows(2).all(|w| w[0] <= w[1]), "index must be sorted");

    // First entry >= target
    let right = index.partition_point(|d| *d < target);
    if right == 0 {
        return Ok(0);
    }
    if right == index.len() {
        return Ok(index.len() - 1);
    }

    let left = right - 1;
    let left_distance = abs_days_between(target, index[left]);
    let right_distance = abs_days_between(index[right], target);
    Ok(if left_distance < right_distance { left } else { right })
}

/// Snaps each target onto `index`, preserving the order of `targets`.
pub fn snap_to_index(
    targets: &[NaiveDate],
    index: &[NaiveDate],
) -> Result<Vec<NaiveDate>, AnalysisError> {
    targets
        .iter()
        .map(|&target| nearest_position(target, index).map(|pos| index[pos]))
        .collect()
}

/// The observation nearest to `target` in the daily series, with its position.
pub fn nearest_trading_day(
    target: NaiveDate,
    series: &PriceSeries,
) -> Result<(usize, PricePoint), AnalysisError> {
    let dates = series.dates();
    let pos = nearest_position(target, &dates)?;
    series
        .get(pos)
        .copied()
        .map(|point| (pos, point))
        .ok_or(AnalysisError::InvalidIndex)
}
