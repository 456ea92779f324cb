//! Plain-text rendering of a `DashboardModel`, used by `--no-gui`.

use std::fmt::Write;

use crate::models::DashboardModel;
use crate::ui::utils::{format_pct, format_price};
use crate::utils::TimeUtils;

pub fn render(model: &DashboardModel) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, model);
    out
}

fn write_report(out: &mut String, model: &DashboardModel) -> std::fmt::Result {
    writeln!(out, "{} year-end close report", model.symbol)?;
    if let Some((first, last)) = model.coverage() {
        writeln!(
            out,
            "{} closes from {} to {}",
            model.series.len(),
            TimeUtils::format(first),
            TimeUtils::format(last)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Year-end markers (two-week Friday bars)")?;
    match &model.markers {
        Ok(markers) => {
            for m in markers {
                writeln!(
                    out,
                    "  {}  {} -> {}  {}",
                    m.year,
                    TimeUtils::format(m.target),
                    TimeUtils::format(m.date),
                    format_price(m.close)
                )?;
            }
        }
        Err(e) => writeln!(out, "  unavailable: {}", e)?,
    }

    writeln!(out)?;
    match &model.returns {
        Ok(hpr) => {
            let s = &hpr.summary;
            writeln!(out, "Return over {} years", s.years)?;
            writeln!(
                out,
                "  start close ({}): {}",
                TimeUtils::format(hpr.start.date),
                format_price(s.start_price)
            )?;
            writeln!(
                out,
                "  end close   ({}): {}",
                TimeUtils::format(hpr.end.date),
                format_price(s.end_price)
            )?;
            writeln!(out, "  total return:        {:.2}%", s.total_return_pct)?;
            writeln!(out, "  simple annual avg:   {:.2}%", s.simple_average_pct)?;
            writeln!(out, "  CAGR:                {:.2}%", s.cagr_pct)?;
        }
        Err(e) => writeln!(out, "Return summary unavailable: {}", e)?,
    }

    writeln!(out)?;
    writeln!(out, "{:<6}{:>12}{:>16}{:>10}", "Year", "close_ye", "prev_close_ye", "yoy_pct")?;
    for row in &model.year_end_rows {
        let prev = row
            .prev_close_ye
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        let yoy = row
            .yoy_pct
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "{:<6}{:>12.2}{:>16}{:>10}", row.year, row.close_ye, prev, yoy)?;
    }

    writeln!(out)?;
    writeln!(out, "Year-end windows")?;
    for window in &model.windows {
        match &window.segment {
            Ok(seg) => writeln!(
                out,
                "  {}  snap {}  {} days  prev {}  next {}",
                window.year,
                TimeUtils::format(seg.snap.date),
                seg.points.len(),
                format_pct(seg.prev_pct),
                format_pct(seg.next_pct)
            )?,
            Err(e) => writeln!(out, "  {}  unavailable: {}", window.year, e)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use crate::domain::{PricePoint, PriceSeries};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn report_lists_every_section() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(d(2020, 1, 2), 100.0),
            PricePoint::new(d(2021, 12, 31), 500.0),
            PricePoint::new(d(2022, 12, 30), 400.0),
            PricePoint::new(d(2023, 12, 29), 600.0),
            PricePoint::new(d(2024, 12, 31), 900.0),
        ]);
        let model = DashboardModel::build("NFLX", series, &ANALYSIS);

        let text = render(&model);

        assert!(text.starts_with("NFLX year-end close report"));
        assert!(text.contains("total return:        800.00%"));
        assert!(text.contains("-20.00"));
        // Last observation has no next day
        assert!(text.contains("next n/a"));
    }
}
