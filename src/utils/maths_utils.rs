use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// `None` for an empty slice, so callers never index into nothing.
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

/// Percentage change from `from` to `to`, i.e. `(to / from - 1) * 100`.
pub fn pct_change(from: f64, to: f64) -> f64 {
    (to / from - 1.0) * 100.0
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Pads a (min, max) range by `pct` of its span on both sides.
/// A flat range gets padded by `pct` of its magnitude instead.
pub fn pad_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 { span * pct } else { min.abs().max(1.0) * pct };
    (min - pad, max + pad)
}
