use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub struct TimeUtils;

impl TimeUtils {
    pub const DAYS_IN_W: i64 = 7;
    pub const DAYS_IN_2_W: i64 = Self::DAYS_IN_W * 2;
    pub const MAX_PLOT_DAYS: f64 = 1.0e6;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Days since 1970-01-01. This is the x coordinate used by every plot.
    pub fn date_to_plot_x(date: NaiveDate) -> f64 {
        (date - NaiveDate::default()).num_days() as f64
    }

    /// Inverse of `date_to_plot_x`, rounding to the nearest whole day.
    pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
        // Far outside any plausible price history; also keeps Duration::days in range
        if !x.is_finite() || x.abs() > Self::MAX_PLOT_DAYS {
            return None;
        }
        NaiveDate::default().checked_add_signed(Duration::days(x.round() as i64))
    }

    /// December 31st of `year`.
    pub fn year_end(year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, 12, 31)
    }

    /// First date on or after `date` that falls on `weekday`.
    pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
        let ahead = (7 + weekday.num_days_from_monday() as i64
            - date.weekday().num_days_from_monday() as i64)
            % 7;
        date + Duration::days(ahead)
    }

    pub fn format(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }
}

/// Absolute distance between two dates in whole days.
pub fn abs_days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}
